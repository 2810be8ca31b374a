//! End-to-end runs of the cleaning pipeline on files.

use std::fs;

use tempfile::TempDir;
use titles_cli::pipeline::run_clean;
use titles_cli::types::CleanPaths;
use titles_ingest::IngestOptions;
use titles_transform::RuleStatus;

const CATALOG: &str = "\
show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description
s1,Movie,Dick Johnson Is Dead,Kirsten Johnson,,United States,\"September 25, 2021\",2020,PG-13,90 min,Documentaries,A documentary.
s2,TV Show,Blood & Water,,\"Ama Qamata, Khosi Ngema\",\"South Africa, United States\",\"September 24, 2021\",2021,TV-MA,2 Seasons,International TV Shows,After crossing paths.
s2,TV Show,Blood & Water,,\"Ama Qamata, Khosi Ngema\",\"South Africa, United States\",\"September 24, 2021\",2021,TV-MA,2 Seasons,International TV Shows,After crossing paths.
";

fn paths_in(dir: &TempDir) -> CleanPaths {
    CleanPaths {
        input: dir.path().join("netflix_titles.csv"),
        output: dir.path().join("cleaned_netflix_titles.csv"),
        summary: dir.path().join("cleaning_summary.md"),
    }
}

#[test]
fn writes_cleaned_csv_and_summary() {
    let dir = TempDir::new().expect("temp dir");
    let paths = paths_in(&dir);
    fs::write(&paths.input, CATALOG).expect("write input");

    let run = run_clean(&paths, &IngestOptions::default()).expect("run clean");
    assert_eq!(run.summary.rows_before(), 3);
    assert_eq!(run.summary.rows_after(), 3);
    assert_eq!(run.summary.duplicates_before(), 1);
    assert!(
        run.rules
            .iter()
            .all(|rule| matches!(rule.status, RuleStatus::Applied { .. }))
    );

    let cleaned = fs::read_to_string(&paths.output).expect("read output");
    let mut lines = cleaned.lines();
    assert_eq!(
        lines.next(),
        Some(
            "show_id,type,title,director,cast,country,date_added,release_year,rating,duration,\
             listed_in,description,added_year,added_month,date_added_ddmmyyyy,duration_int,\
             duration_type,title_lower,num_cast"
        )
    );
    assert_eq!(
        lines.next(),
        Some(
            "s1,Movie,Dick Johnson Is Dead,Kirsten Johnson,Unknown,United States,2021-09-25,2020,\
             PG-13,90 min,Documentaries,A documentary.,2021,9,25-09-2021,90,minutes,\
             dick johnson is dead,0"
        )
    );
    assert_eq!(
        lines.next(),
        Some(
            "s2,Tv Show,Blood & Water,Unknown,\"Ama Qamata, Khosi Ngema\",South Africa,2021-09-24,\
             2021,TV-MA,2 Seasons,International TV Shows,After crossing paths.,2021,9,24-09-2021,\
             2,seasons,blood & water,2"
        )
    );

    let report = fs::read_to_string(&paths.summary).expect("read summary");
    assert!(report.starts_with("# Cleaning summary for netflix_titles.csv\n"));
    assert!(report.contains("- Rows before: 3\n"));
    assert!(report.contains("- Duplicates after: 1\n"));
    assert!(report.contains("| cast | 1 |"));
    assert!(report.contains("| cast | 0 |"));
}

#[test]
fn missing_input_is_fatal_and_writes_nothing() {
    let dir = TempDir::new().expect("temp dir");
    let paths = paths_in(&dir);

    let error = run_clean(&paths, &IngestOptions::default()).unwrap_err();
    assert!(format!("{error:#}").contains("netflix_titles.csv"));
    assert!(!paths.output.exists());
    assert!(!paths.summary.exists());
}

#[test]
fn unwritable_output_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    let mut paths = paths_in(&dir);
    fs::write(&paths.input, CATALOG).expect("write input");
    paths.output = dir.path().join("no-such-dir").join("out.csv");

    let error = run_clean(&paths, &IngestOptions::default()).unwrap_err();
    assert!(format!("{error:#}").contains("out.csv"));
}
