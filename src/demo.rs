//! Side-by-side demonstration of every kata variant
//!
//! Runs each algorithm on the exercise's sample inputs, checks the outputs
//! against known answers where there is one, and times each variant. The
//! report is plain data; [`crate::output`] renders it.

use crate::case;
use crate::config::Config;
use crate::errors::Result;
use crate::last_occurrence::{self, SearchStrategy};
use crate::random_subset::{self, Strategy, SubsetRequest};
use crate::whitespace::{self, StripMode};
use serde::Serialize;
use std::collections::HashSet;
use std::hint::black_box;
use std::time::Instant;
use tracing::info;

/// Which kata the demo covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum DemoTopic {
    #[default]
    All,
    Random,
    Whitespace,
    LastOccurrence,
    Pascal,
    Toggle,
}

#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub sections: Vec<DemoSection>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DemoSection {
    pub title: String,
    pub rows: Vec<DemoRow>,
    pub timings: Vec<Timing>,
}

/// One variant applied to one input.
#[derive(Debug, Clone, Serialize)]
pub struct DemoRow {
    pub method: String,
    pub input: String,
    pub output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    /// `None` when there is nothing to check against
    pub passed: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Timing {
    pub method: String,
    pub iterations: u32,
    pub elapsed_ms: f64,
}

impl DemoRow {
    fn checked(method: &str, input: &str, output: String, expected: &str) -> Self {
        Self {
            method: method.to_string(),
            input: input.to_string(),
            passed: Some(output == expected),
            output,
            expected: Some(expected.to_string()),
        }
    }

    fn shown(method: &str, input: &str, output: String) -> Self {
        Self {
            method: method.to_string(),
            input: input.to_string(),
            output,
            expected: None,
            passed: None,
        }
    }

    fn verified(method: &str, input: &str, output: String, ok: bool) -> Self {
        Self {
            passed: Some(ok),
            ..Self::shown(method, input, output)
        }
    }
}

impl DemoReport {
    pub fn all_passed(&self) -> bool {
        self.failures().next().is_none()
    }

    pub fn failures(&self) -> impl Iterator<Item = &DemoRow> {
        self.sections
            .iter()
            .flat_map(|s| s.rows.iter())
            .filter(|row| row.passed == Some(false))
    }

    pub fn checked_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|s| s.rows.iter())
            .filter(|row| row.passed.is_some())
            .count()
    }
}

/// Build the report for `topic`.
pub fn run_demo(topic: DemoTopic, config: &Config) -> Result<DemoReport> {
    let iterations = config.demo.timing_iterations;
    let mut sections = Vec::new();

    if matches!(topic, DemoTopic::All | DemoTopic::Random) {
        sections.push(random_section(&config.random.request(), iterations)?);
    }
    if matches!(topic, DemoTopic::All | DemoTopic::Whitespace) {
        sections.push(whitespace_section(&config.whitespace.replacement, iterations));
    }
    if matches!(topic, DemoTopic::All | DemoTopic::LastOccurrence) {
        sections.push(last_occurrence_section(iterations));
    }
    if matches!(topic, DemoTopic::All | DemoTopic::Pascal) {
        sections.push(pascal_section(iterations));
    }
    if matches!(topic, DemoTopic::All | DemoTopic::Toggle) {
        sections.push(toggle_section(iterations));
    }

    let report = DemoReport { sections };
    info!(
        sections = report.sections.len(),
        checked = report.checked_count(),
        passed = report.all_passed(),
        "Demo finished"
    );
    Ok(report)
}

fn time<F: FnMut()>(method: &str, iterations: u32, mut f: F) -> Timing {
    let start = Instant::now();
    for _ in 0..iterations {
        f();
    }
    Timing {
        method: method.to_string(),
        iterations,
        elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
    }
}

fn random_section(request: &SubsetRequest, iterations: u32) -> Result<DemoSection> {
    let input = format!(
        "{} distinct values from [{}, {}]",
        request.length, request.min, request.max
    );
    let mut rows = Vec::new();
    let mut timings = Vec::new();

    for strategy in Strategy::ALL {
        if let Err(e) = request.validate_for(strategy) {
            rows.push(DemoRow::shown(strategy.name(), &input, format!("skipped: {}", e)));
            continue;
        }
        for _ in 0..3 {
            let values = random_subset::generate(request, strategy)?;
            let distinct: HashSet<_> = values.iter().collect();
            let ok = values.len() == request.length
                && distinct.len() == values.len()
                && values.iter().all(|v| (request.min..=request.max).contains(v));
            rows.push(DemoRow::verified(
                strategy.name(),
                &input,
                format!("{:?}", values),
                ok,
            ));
        }
        timings.push(time(strategy.name(), iterations, || {
            let _ = black_box(random_subset::generate(black_box(request), strategy));
        }));
    }

    Ok(DemoSection {
        title: "Unique random subset".to_string(),
        rows,
        timings,
    })
}

fn whitespace_section(replacement: &str, iterations: u32) -> DemoSection {
    const SPACES: &str = "  Hello   World  \n\t  JavaScript  ";
    const CONTROL: &str = "这是一个\t包含制表符\n和换行符\r的测试字符串\t\n\r";

    let mut rows: Vec<DemoRow> = StripMode::ALL
        .iter()
        .map(|mode| DemoRow::shown(mode.name(), SPACES, whitespace::strip(SPACES, *mode)))
        .collect();

    rows.push(DemoRow::checked(
        StripMode::TabsAndNewlines.name(),
        CONTROL,
        whitespace::strip(CONTROL, StripMode::TabsAndNewlines),
        "这是一个包含制表符和换行符的测试字符串",
    ));
    rows.push(DemoRow::shown(
        "replace tabs and newlines",
        CONTROL,
        whitespace::replace_tabs_and_newlines(CONTROL, replacement),
    ));

    let trimmed = whitespace::strip(SPACES, StripMode::Trim);
    rows.push(DemoRow::checked(
        "trim is idempotent",
        &trimmed,
        whitespace::strip(&trimmed, StripMode::Trim),
        &trimmed,
    ));

    let timings = StripMode::ALL
        .iter()
        .map(|mode| {
            time(mode.name(), iterations, || {
                black_box(whitespace::strip(black_box(SPACES), *mode));
            })
        })
        .collect();

    DemoSection {
        title: "Whitespace stripping".to_string(),
        rows,
        timings,
    }
}

fn last_occurrence_section(iterations: u32) -> DemoSection {
    const CASES: &[(&str, char, &str)] = &[
        ("hello world", 'l', "hello word"),
        ("javascript", 'a', "javscript"),
        ("programming", 'm', "programing"),
        ("test", 'x', "test"),
        ("aaaaaa", 'a', "aaaaa"),
        ("", 'a', ""),
        ("single", 's', "ingle"),
    ];
    const SUBSTRING_CASES: &[(&str, &str, &str)] = &[
        ("hello world hello", "hello", "hello world "),
        ("abcdefabcdef", "abc", "abcdefdef"),
        ("test string", "xyz", "test string"),
    ];

    let mut rows = Vec::new();
    for (text, needle, expected) in CASES {
        for strategy in SearchStrategy::ALL {
            rows.push(DemoRow::checked(
                strategy.name(),
                &format!("{} - last {:?}", text, needle),
                strategy.apply(text, *needle),
                expected,
            ));
        }
    }
    for (text, needle, expected) in SUBSTRING_CASES {
        rows.push(DemoRow::checked(
            "substring",
            &format!("{} - last {:?}", text, needle),
            last_occurrence::remove_last_occurrence(text, needle),
            expected,
        ));
    }

    let haystack = format!("{}b{}", "a".repeat(10_000), "a".repeat(10_000));
    let timings = SearchStrategy::ALL
        .iter()
        .map(|strategy| {
            time(strategy.name(), iterations, || {
                black_box(strategy.apply(black_box(&haystack), 'b'));
            })
        })
        .collect();

    DemoSection {
        title: "Remove last occurrence".to_string(),
        rows,
        timings,
    }
}

fn pascal_section(iterations: u32) -> DemoSection {
    const CASES: &[(&str, &str)] = &[
        ("user_name", "UserName"),
        ("first_name", "FirstName"),
        ("user_profile_image", "UserProfileImage"),
        ("api_key", "ApiKey"),
        ("database_connection", "DatabaseConnection"),
        ("hello_world", "HelloWorld"),
        ("a", "A"),
        ("", ""),
        ("single", "Single"),
        ("multiple_under_scores", "MultipleUnderScores"),
    ];

    let mut rows: Vec<DemoRow> = CASES
        .iter()
        .map(|(input, expected)| {
            DemoRow::checked("to_pascal_case", input, case::to_pascal_case(input), expected)
        })
        .collect();

    let inputs: Vec<&str> = CASES.iter().map(|(input, _)| *input).collect();
    let expected: Vec<&str> = CASES.iter().map(|(_, expected)| *expected).collect();
    rows.push(DemoRow::checked(
        "batch_to_pascal_case",
        &format!("{:?}", inputs),
        format!("{:?}", case::batch_to_pascal_case(&inputs)),
        &format!("{:?}", expected),
    ));

    let timings = vec![time("to_pascal_case", iterations, || {
        black_box(case::to_pascal_case(black_box("user_profile_image")));
    })];

    DemoSection {
        title: "snake_case to PascalCase".to_string(),
        rows,
        timings,
    }
}

fn toggle_section(iterations: u32) -> DemoSection {
    const CASES: &[&str] = &[
        "Hello World!",
        "JavaScript",
        "ABC123def",
        "hELLo WoRLd!",
        "123!@#",
        "",
        "a",
        "A",
        "aB1cD2eF3",
        "The Quick Brown Fox Jumps Over The Lazy Dog",
    ];

    let mut rows = Vec::new();
    for input in CASES {
        let ascii = case::toggle_case(input);
        rows.push(DemoRow::checked(
            "toggle_case (round trip)",
            input,
            case::toggle_case(&ascii),
            input,
        ));
        rows.push(DemoRow::checked(
            "toggle_case_unicode",
            input,
            case::toggle_case_unicode(input),
            &ascii,
        ));
    }
    rows.push(DemoRow::shown(
        "toggle_case_unicode",
        "Straße Ωμέγα",
        case::toggle_case_unicode("Straße Ωμέγα"),
    ));

    let sample = "The Quick Brown Fox Jumps Over The Lazy Dog".repeat(100);
    let timings = vec![
        time("toggle_case", iterations, || {
            black_box(case::toggle_case(black_box(&sample)));
        }),
        time("toggle_case_unicode", iterations, || {
            black_box(case::toggle_case_unicode(black_box(&sample)));
        }),
    ];

    DemoSection {
        title: "Case toggle".to_string(),
        rows,
        timings,
    }
}
