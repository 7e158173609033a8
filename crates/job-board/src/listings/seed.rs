use super::domain::{
    Company, CompanySize, EmploymentType, ExperienceLevel, Job, LocalizedText, NewCompany, NewJob,
    UserId,
};
use super::repository::ListingRepository;
use super::service::{JobBoardService, ServiceError};

/// Records created by [`seed_sample_data`].
#[derive(Debug, Clone)]
pub struct SampleData {
    pub companies: Vec<Company>,
    pub jobs: Vec<Job>,
}

/// Populates an empty board with two employers and one opening each.
///
/// The owning employer accounts are placeholders and are not registered as users.
pub fn seed_sample_data<R>(service: &JobBoardService<R>) -> Result<SampleData, ServiceError>
where
    R: ListingRepository + 'static,
{
    let tech = service.register_company(
        &UserId::new("employer1"),
        NewCompany {
            name: LocalizedText::new("شركة التقنيات المتقدمة")
                .with_english("Advanced Technologies Company"),
            description: Some(
                LocalizedText::new("شركة رائدة في مجال تقنية المعلومات")
                    .with_english("Leading company in information technology"),
            ),
            logo: None,
            website: None,
            industry: Some("تقنية المعلومات".to_string()),
            location: Some("صنعاء".to_string()),
            size: Some(CompanySize::Medium),
        },
    )?;

    let hospital = service.register_company(
        &UserId::new("employer2"),
        NewCompany {
            name: LocalizedText::new("مستشفى السلام الطبي").with_english("Al-Salam Medical Hospital"),
            description: Some(
                LocalizedText::new("مركز طبي متخصص").with_english("Specialized medical center"),
            ),
            logo: None,
            website: None,
            industry: Some("الرعاية الصحية".to_string()),
            location: Some("عدن".to_string()),
            size: Some(CompanySize::Large),
        },
    )?;

    let frontend = service.post_job(
        &tech.id,
        NewJob {
            title: LocalizedText::new("مطور ويب فرونت إند").with_english("Frontend Web Developer"),
            description: LocalizedText::new(
                "نبحث عن مطور ويب محترف للانضمام إلى فريقنا لتطوير وصيانة مواقع الويب والتطبيقات التفاعلية باستخدام أحدث التقنيات",
            )
            .with_english(
                "Looking for a professional web developer to join our team for developing and maintaining interactive websites and applications using cutting-edge technologies",
            ),
            requirements: Some(LocalizedText::new("خبرة في React، JavaScript، CSS")),
            location: "صنعاء".to_string(),
            employment_type: EmploymentType::FullTime,
            experience: Some(ExperienceLevel::Mid),
            category: "تقنية المعلومات".to_string(),
            skills: vec![
                "React".to_string(),
                "JavaScript".to_string(),
                "CSS".to_string(),
            ],
            salary: None,
        },
    )?;

    let nurse = service.post_job(
        &hospital.id,
        NewJob {
            title: LocalizedText::new("ممرض/ة مؤهل/ة").with_english("Qualified Nurse"),
            description: LocalizedText::new("مطلوب ممرض/ة مؤهل/ة للعمل في قسم العناية المركزة")
                .with_english("Qualified nurse required for intensive care unit"),
            requirements: Some(LocalizedText::new(
                "بكالوريوس في التمريض، خبرة سنتين على الأقل",
            )),
            location: "عدن".to_string(),
            employment_type: EmploymentType::FullTime,
            experience: Some(ExperienceLevel::Mid),
            category: "الرعاية الصحية".to_string(),
            skills: vec![
                "التمريض".to_string(),
                "العناية المركزة".to_string(),
                "الرعاية الصحية".to_string(),
            ],
            salary: None,
        },
    )?;

    Ok(SampleData {
        companies: vec![tech, hospital],
        jobs: vec![frontend, nurse],
    })
}
