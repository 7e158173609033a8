use serde::Serialize;

use super::domain::LocalizedText;

/// Entry of a fixed lookup list served to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceEntry {
    pub name: LocalizedText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

const CATEGORIES: [(&str, &str, u32); 6] = [
    ("تقنية المعلومات", "Information Technology", 247),
    ("الإدارة", "Management", 182),
    ("المبيعات والتسويق", "Sales & Marketing", 156),
    ("التعليم", "Education", 134),
    ("الرعاية الصحية", "Healthcare", 98),
    ("الهندسة", "Engineering", 89),
];

const LOCATIONS: [(&str, &str); 6] = [
    ("صنعاء", "Sanaa"),
    ("عدن", "Aden"),
    ("تعز", "Taiz"),
    ("الحديدة", "Hodeidah"),
    ("إب", "Ibb"),
    ("المكلا", "Mukalla"),
];

/// Job categories with the advertised posting counts shown on the home page.
pub fn job_categories() -> Vec<ReferenceEntry> {
    CATEGORIES
        .iter()
        .map(|(primary, english, count)| ReferenceEntry {
            name: LocalizedText::new(*primary).with_english(*english),
            count: Some(*count),
        })
        .collect()
}

pub fn locations() -> Vec<ReferenceEntry> {
    LOCATIONS
        .iter()
        .map(|(primary, english)| ReferenceEntry {
            name: LocalizedText::new(*primary).with_english(*english),
            count: None,
        })
        .collect()
}
