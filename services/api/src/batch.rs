use clap::Args;
use job_match::error::AppError;
use job_match::matching::{
    rank_scores, ApplicantData, JobRequirements, MatchingEngine, PoolStatistics, RankedEntry,
    ScoringPolicy,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Job requirements JSON file
    #[arg(long)]
    pub(crate) job: PathBuf,
    /// Applicant JSON file
    #[arg(long)]
    pub(crate) applicant: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    /// Job requirements JSON file
    #[arg(long)]
    pub(crate) job: PathBuf,
    /// JSON array of applicants, each with an optional `id`
    #[arg(long)]
    pub(crate) applicants: PathBuf,
    /// Write the ranking to this CSV file as well
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

/// One entry of an applicant pool file.
#[derive(Debug, Deserialize)]
pub(crate) struct PoolEntry {
    #[serde(default)]
    pub(crate) id: Option<String>,
    #[serde(flatten)]
    pub(crate) applicant: ApplicantData,
}

pub(crate) fn run_score(args: ScoreArgs, policy: &ScoringPolicy) -> Result<(), AppError> {
    let job: JobRequirements = read_json(&args.job)?;
    let applicant: ApplicantData = read_json(&args.applicant)?;

    let engine = MatchingEngine::new(policy.clone());
    let breakdown = engine.score(&job, &applicant);
    println!("{}", serde_json::to_string_pretty(&breakdown)?);
    Ok(())
}

pub(crate) fn run_rank(args: RankArgs, policy: &ScoringPolicy) -> Result<(), AppError> {
    let job: JobRequirements = read_json(&args.job)?;
    let pool: Vec<PoolEntry> = read_json(&args.applicants)?;

    let ranked = rank_pool(&MatchingEngine::new(policy.clone()), &job, pool);
    let totals: Vec<f64> = ranked
        .iter()
        .map(|entry| entry.breakdown.total_score)
        .collect();
    let statistics = PoolStatistics::from_scores(&totals);

    println!(
        "Ranked {} applicants | min {:.2} | mean {:.2} | max {:.2}",
        statistics.count, statistics.min, statistics.mean, statistics.max
    );
    for entry in &ranked {
        println!(
            "{:>3}. {:<16} {:>6.2}  {}  ({:.0}th percentile)",
            entry.rank,
            entry.key,
            entry.breakdown.total_score,
            entry.breakdown.algorithm_used,
            statistics.percentile_of(entry.breakdown.total_score)
        );
    }

    if let Some(path) = args.csv {
        let file = fs::File::create(&path)?;
        write_csv(file, &ranked)?;
        println!("CSV export written to {}", path.display());
    }

    Ok(())
}

pub(crate) fn rank_pool(
    engine: &MatchingEngine,
    job: &JobRequirements,
    pool: Vec<PoolEntry>,
) -> Vec<RankedEntry<String>> {
    let (ids, applicants): (Vec<String>, Vec<ApplicantData>) = pool
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let id = entry
                .id
                .unwrap_or_else(|| format!("applicant-{:03}", index + 1));
            (id, entry.applicant)
        })
        .unzip();

    let breakdowns = engine.score_batch(job, &applicants);
    rank_scores(ids.into_iter().zip(breakdowns).collect())
}

pub(crate) fn write_csv<W: Write>(
    writer: W,
    ranked: &[RankedEntry<String>],
) -> Result<(), AppError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record([
            "rank",
            "application_id",
            "total_score",
            "education_score",
            "experience_score",
            "skills_score",
            "eligibility_score",
            "algorithm_used",
        ])
        .map_err(std::io::Error::from)?;

    for entry in ranked {
        let breakdown = &entry.breakdown;
        csv_writer
            .write_record([
                entry.rank.to_string(),
                entry.key.clone(),
                format!("{:.2}", breakdown.total_score),
                format!("{:.2}", breakdown.education_score),
                format!("{:.2}", breakdown.experience_score),
                format!("{:.2}", breakdown.skills_score),
                format!("{:.2}", breakdown.eligibility_score),
                breakdown.algorithm_used.label().to_string(),
            ])
            .map_err(std::io::Error::from)?;
    }

    csv_writer.flush()?;
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
