use clap::Parser;

use super::*;
use crate::checker::LockCounter;
use crate::query::mock::{MockChannel, file_row, name_row};
use crate::query::{Row, wql};

const ROOT: &str = "\\\\logs\\\\";
const SUB: &str = "\\\\logs\\\\sub\\\\";
const NOW: &str = "20240101120000.000000+480";

fn target(recursive: bool) -> FileTarget {
    FileTarget {
        selector: FileSelector {
            drive: "d:".to_string(),
            filename: "%".to_string(),
            extension: "%".to_string(),
        },
        path: ROOT.to_string(),
        recursive,
        max_depth: 64,
    }
}

fn clock_row(value: &str) -> Row {
    Row::new().with("LocalDateTime", value)
}

fn count_check(warning: u64, critical: u64, recursive: bool) -> Check {
    Check::FileCount(FileCountCheck {
        target: target(recursive),
        thresholds: Thresholds::new(warning, critical),
    })
}

fn age_check(policy: ClockPolicy) -> Check {
    Check::FileAge(FileAgeCheck {
        target: target(true),
        thresholds: Thresholds::new(30, 60),
        clock_policy: policy,
    })
}

/// d:\logs holds old1.log (2h) and new.log (5min); d:\logs\sub holds old2.log (3h).
fn aged_tree() -> MockChannel {
    MockChannel::new()
        .respond(wql::LOCAL_DATETIME, vec![clock_row(NOW)])
        .respond(
            &wql::data_files("LastModified", "d:", ROOT, "%", "%"),
            vec![
                file_row("d:\\logs\\old1.log", "20240101100000.000000+480"),
                file_row("d:\\logs\\new.log", "20240101115500.000000+480"),
            ],
        )
        .respond(&wql::directories("d:", ROOT), vec![name_row("d:\\logs\\sub")])
        .respond(
            &wql::data_files("LastModified", "d:", SUB, "%", "%"),
            vec![file_row("d:\\logs\\sub\\old2.log", "20240101090000.000000+480")],
        )
}

#[test]
fn file_count_within_warning_is_ok() {
    let channel = MockChannel::new().respond(
        &wql::data_files("Name", "d:", ROOT, "%", "%"),
        vec![
            name_row("d:\\logs\\a.log"),
            name_row("d:\\logs\\b.log"),
            name_row("d:\\logs\\c.log"),
        ],
    );

    let status = run_check(&count_check(3, 5, false), &channel, None);

    assert_eq!(
        status,
        Status::Ok(
            "Found 3 files in \\\\logs\\\\. | \n\
             d:\\logs\\a.log\nd:\\logs\\b.log\nd:\\logs\\c.log | \n\
             \\\\logs\\\\=3;3;5;0;"
                .to_string()
        )
    );
    assert_eq!(channel.count_matching("CIM_Directory"), 0);
}

#[test]
fn file_count_above_critical_is_critical() {
    let channel = MockChannel::new().respond_matching(
        "CIM_DataFile",
        vec![name_row("d:\\logs\\a.log"), name_row("d:\\logs\\b.log")],
    );

    let status = run_check(&count_check(0, 1, false), &channel, None);

    assert_eq!(status.exit_code(), 2);
    assert!(status.message().starts_with("Found 2 files in"));
}

#[test]
fn file_count_ignores_header_rows() {
    let channel = MockChannel::new().respond_matching(
        "CIM_DataFile",
        vec![name_row("Name"), name_row("d:\\logs\\a.log"), name_row("")],
    );

    let status = run_check(&count_check(0, 5, false), &channel, None);

    assert_eq!(status.keyword(), "WARNING");
    assert!(status.message().starts_with("Found 1 files in"));
    assert!(!status.message().contains("\nName\n"));
}

#[test]
fn empty_directory_reports_zero_without_long_output() {
    let channel = MockChannel::new();

    let status = run_check(&count_check(0, 0, false), &channel, None);

    assert_eq!(
        status,
        Status::Ok("Found 0 files in \\\\logs\\\\. | \n\\\\logs\\\\=0;0;0;0;".to_string())
    );
}

#[test]
fn file_age_buckets_recursive_tree() {
    let channel = aged_tree();

    let status = run_check(&age_check(ClockPolicy::Once), &channel, None);

    assert_eq!(
        status,
        Status::Critical(
            "Found 2 files out of date. | \n\
             ===== Critical File out of date ====\n\
             d:\\logs\\old1.log\n\
             d:\\logs\\sub\\old2.log\n\
             ===== OK File out of date ====\n\
             d:\\logs\\new.log | \n\
             d:\\\\logs\\\\=2;30;60;0;"
                .to_string()
        )
    );
}

#[test]
fn file_age_reads_clock_once_by_default() {
    let channel = aged_tree();

    run_check(&age_check(ClockPolicy::Once), &channel, None);

    assert_eq!(channel.count_matching("Win32_OperatingSystem"), 1);
}

#[test]
fn file_age_per_file_clock_queries_for_every_file() {
    let channel = aged_tree();

    let status = run_check(&age_check(ClockPolicy::PerFile), &channel, None);

    assert_eq!(status.keyword(), "CRITICAL");
    assert_eq!(channel.count_matching("Win32_OperatingSystem"), 3);
}

#[test]
fn file_age_without_files_never_reads_clock() {
    let channel = MockChannel::new().fail_matching("Win32_OperatingSystem", "clock down");

    let status = run_check(&age_check(ClockPolicy::Once), &channel, None);

    assert_eq!(
        status,
        Status::Ok("Found 0 files out of date. | \nd:\\\\logs\\\\=0;30;60;0;".to_string())
    );
    assert_eq!(channel.count_matching("Win32_OperatingSystem"), 0);
}

#[test]
fn file_age_warning_band() {
    let channel = MockChannel::new()
        .respond(wql::LOCAL_DATETIME, vec![clock_row(NOW)])
        .respond_matching(
            "CIM_DataFile",
            vec![file_row("d:\\logs\\mid.log", "20240101112000.000000+480")],
        );

    let status = run_check(&age_check(ClockPolicy::Once), &channel, None);

    assert_eq!(status.keyword(), "WARNING");
    assert!(status.message().contains("===== Warning File out of date ====\nd:\\logs\\mid.log"));
}

#[test]
fn file_age_bad_timestamp_is_unknown() {
    let channel = MockChannel::new()
        .respond(wql::LOCAL_DATETIME, vec![clock_row(NOW)])
        .respond_matching("CIM_DataFile", vec![file_row("d:\\logs\\x.log", "yesterday")]);

    let status = run_check(&age_check(ClockPolicy::Once), &channel, None);

    assert_eq!(status.exit_code(), 3);
    assert!(status.message().starts_with("Malformed WMI data"));
}

#[test]
fn counter_above_warning_is_warning() {
    let channel = MockChannel::new().respond(
        &wql::sqlserver_locks("LockWaitsPersec"),
        vec![
            Row::from_iter([("LockWaitsPersec", "LockWaitsPersec"), ("Name", "Name")]),
            Row::from_iter([("LockWaitsPersec", "7"), ("Name", "_Total")]),
        ],
    );
    let check = Check::Counter(CounterCheck {
        counter: LockCounter::LockWaitsPersec,
        thresholds: Thresholds::new(5, 10),
    });

    let status = run_check(&check, &channel, None);

    assert_eq!(
        status,
        Status::Warning(
            "Found 0 LockWaitsPersec critical. | \n\
             ===== Warning ====\n\
             _Total : 7 | \n\
             LockWaitsPersec=0;5;10;0;"
                .to_string()
        )
    );
}

#[test]
fn counter_mixed_instances_list_critical_first() {
    let channel = MockChannel::new().respond_matching(
        "SQLServerLocks",
        vec![
            Row::from_iter([("NumberofDeadlocksPersec", "0"), ("Name", "OrderDB")]),
            Row::from_iter([("NumberofDeadlocksPersec", "4"), ("Name", "_Total")]),
        ],
    );
    let check = Check::Counter(CounterCheck {
        counter: LockCounter::NumberofDeadlocksPersec,
        thresholds: Thresholds::new(0, 2),
    });

    let status = run_check(&check, &channel, None);

    assert_eq!(status.keyword(), "CRITICAL");
    assert!(status.message().contains(
        "===== Critical ====\n_Total : 4\n===== OK ====\nOrderDB : 0"
    ));
    assert!(status.message().ends_with("NumberofDeadlocksPersec=1;0;2;0;"));
}

#[test]
fn failing_query_mid_walk_is_unknown_without_file_list() {
    let channel = MockChannel::new()
        .respond(
            &wql::data_files("Name", "d:", ROOT, "%", "%"),
            vec![name_row("d:\\logs\\a.log")],
        )
        .respond(&wql::directories("d:", ROOT), vec![name_row("d:\\logs\\sub")])
        .fail_matching(SUB, "NT_STATUS_ACCESS_DENIED");

    let status = run_check(&count_check(0, 0, true), &channel, None);

    assert_eq!(status.exit_code(), 3);
    assert!(status.message().starts_with("Connect by wmi and run wql error:"));
    assert!(status.message().contains("NT_STATUS_ACCESS_DENIED"));
    assert!(!status.message().contains("a.log"));
}

#[test]
fn long_output_limit_adds_footer() {
    let channel = MockChannel::new().respond_matching(
        "CIM_DataFile",
        (1..=5).map(|i| name_row(&format!("d:\\logs\\{i}.log"))).collect(),
    );

    let status = run_check(&count_check(10, 10, false), &channel, Some(2));

    assert_eq!(
        status.message(),
        "Found 5 files in \\\\logs\\\\. | \n\
         d:\\logs\\1.log\nd:\\logs\\2.log\n\
         (...showing only first 2 lines, 3 elements remaining...) | \n\
         \\\\logs\\\\=5;10;10;0;"
    );
}

#[test]
fn braces_in_names_are_a_render_error() {
    let channel =
        MockChannel::new().respond_matching("CIM_DataFile", vec![name_row("d:\\logs\\{x}.log")]);

    let status = run_check(&count_check(1, 1, false), &channel, None);

    assert_eq!(status.exit_code(), 3);
    assert!(status.message().starts_with("Output template error"));
}

#[test]
fn from_command_builds_each_check() {
    let cli = Cli::parse_from(["check_wmi", "fileage", "-d", "e:", "-R", "--clock-per-file"]);
    match Check::from_command(&cli.command).unwrap() {
        Check::FileAge(check) => {
            assert_eq!(check.target.selector.drive, "e:");
            assert_eq!(check.target.path, "\\\\");
            assert!(check.target.recursive);
            assert_eq!(check.thresholds, Thresholds::new(30, 60));
            assert_eq!(check.clock_policy, ClockPolicy::PerFile);
        }
        other => panic!("Expected FileAge, got {other:?}"),
    }

    let cli = Cli::parse_from(["check_wmi", "sqlserverlocks", "-m", "LockTimeoutsPersec"]);
    assert!(matches!(
        Check::from_command(&cli.command).unwrap(),
        Check::Counter(CounterCheck {
            counter: LockCounter::LockTimeoutsPersec,
            ..
        })
    ));
}

#[test]
fn unknown_counter_mode_is_a_config_error() {
    let cli = Cli::parse_from(["check_wmi", "sqlserverlocks", "-m", "LockRequestsPersec"]);

    let err = Check::from_command(&cli.command).unwrap_err();

    assert!(err.to_string().contains("Unknown SqlServerLocks options 'LockRequestsPersec'"));
}

#[test]
fn run_without_host_is_unknown() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = dir.path().join("empty.toml");
    std::fs::write(&config, "").unwrap();
    let cli = Cli::parse_from([
        "check_wmi",
        "--config",
        config.to_str().unwrap(),
        "filenumber",
        "-d",
        "C:",
    ]);

    let status = run(&cli);

    assert_eq!(status.exit_code(), 3);
    assert!(status.line().starts_with("UNKNOWN - Configuration error: missing host"));
}
