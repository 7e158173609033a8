use crate::infra::in_memory_board;
use clap::Args;
use job_board::error::AppError;
use job_board::listings::{JobSearch, JobWithCompany, Locale};
use std::io::{self, Write};

#[derive(Args, Debug, Default)]
pub(crate) struct SearchArgs {
    /// Case-insensitive text matched against titles, description and company name
    #[arg(long)]
    pub(crate) query: Option<String>,
    /// Exact location name, e.g. صنعاء
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Exact category name, e.g. "تقنية المعلومات"
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// Employment type tag: full_time, part_time, contract or remote
    #[arg(long)]
    pub(crate) employment_type: Option<String>,
    /// Display language for localized fields (ar or en)
    #[arg(long, default_value = "ar")]
    pub(crate) lang: Locale,
}

impl SearchArgs {
    fn filters(&self) -> JobSearch {
        JobSearch {
            query: self.query.clone(),
            location: self.location.clone(),
            category: self.category.clone(),
            employment_type: self.employment_type.clone(),
        }
    }
}

/// Searches a freshly seeded board and prints the matches.
pub(crate) fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let service = in_memory_board(true)?;
    let jobs = service.search_jobs(&args.filters())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_results(&jobs, args.lang, &mut out)?;
    Ok(())
}

pub(crate) fn render_results<W: Write>(
    jobs: &[JobWithCompany],
    locale: Locale,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "{} matching job(s) [{}]", jobs.len(), locale.tag())?;
    for entry in jobs {
        writeln!(
            out,
            "- {} | {} | {} | {}",
            entry.job.title.resolve(locale),
            entry.company.name.resolve(locale),
            entry.job.location,
            entry.job.employment_type.label()
        )?;
        if let Some(salary) = &entry.job.salary {
            writeln!(out, "  salary: {salary}")?;
        }
    }
    Ok(())
}
