//! # 无窗口运行集成测试

use std::convert::Infallible;

use anim_runtime::{AnimationEvent, ButtonKind, MainScreen, PressOutcome};
use host::{AppConfig, HeadlessRunner, PressSchedule, RunSummary};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn run(config: &AppConfig, schedule: &str) -> (RunSummary, Vec<host::FrameTrace>) {
    let screen = MainScreen::new(
        config.to_layout(),
        StdRng::seed_from_u64(config.seed.unwrap_or(0)),
    )
    .unwrap();
    let mut runner = HeadlessRunner::new(
        screen,
        PressSchedule::parse(schedule).unwrap(),
        config.frame_dt(),
        config.timing.max_seconds,
    );

    let mut frames = Vec::new();
    let summary = runner
        .run(|frame| {
            frames.push(frame.clone());
            Ok::<(), Infallible>(())
        })
        .unwrap();
    (summary, frames)
}

#[test]
fn test_rotate_runs_to_completion() {
    let (summary, frames) = run(&AppConfig::default(), "0:rotate");

    assert!(!summary.timed_out);
    assert_eq!(summary.frames, frames.len() as u64);
    // 1 秒动画，60 帧左右结束
    assert!((59..=62).contains(&summary.frames));

    let star = &summary.snapshot.views[0];
    assert_eq!(star.rotation, 0.0);
    assert!(summary.snapshot.buttons.iter().all(|b| b.enabled));
    assert_eq!(summary.snapshot.active_animations, 0);

    let ended: Vec<_> = frames
        .iter()
        .flat_map(|f| f.events.iter())
        .filter(|e| matches!(e, AnimationEvent::Ended(_)))
        .collect();
    assert_eq!(ended.len(), 1);
}

#[test]
fn test_second_press_while_running_is_ignored() {
    let (summary, frames) = run(&AppConfig::default(), "0:rotate,0.5:rotate");

    assert_eq!(summary.presses, 2);
    assert_eq!(summary.ignored, 1);

    let outcomes: Vec<_> = frames
        .iter()
        .flat_map(|f| f.presses.iter())
        .map(|p| (p.kind, p.outcome))
        .collect();
    assert!(matches!(outcomes[0], (ButtonKind::Rotate, PressOutcome::Started(_))));
    assert_eq!(outcomes[1], (ButtonKind::Rotate, PressOutcome::Ignored));
}

#[test]
fn test_press_after_completion_starts_again() {
    let (summary, _) = run(&AppConfig::default(), "0:fade,1.0:fade");
    assert_eq!(summary.presses, 2);
    assert_eq!(summary.ignored, 0);
    assert_eq!(summary.snapshot.views[0].alpha, 1.0);
}

#[test]
fn test_showers_leave_only_the_star() {
    let mut config = AppConfig::default();
    config.seed = Some(99);
    let (summary, frames) = run(&config, "0:shower,0:shower,0.2:shower");

    assert!(!summary.timed_out);
    assert_eq!(summary.ignored, 0);
    assert_eq!(summary.snapshot.views.len(), 1);
    assert!(frames.iter().any(|f| f.snapshot.views.len() == 4));
}

#[test]
fn test_timeout_cancels_and_re_enables() {
    let mut config = AppConfig::default();
    config.timing.max_seconds = 0.5;
    let (summary, _) = run(&config, "0:rotate,0:colorize");

    assert!(summary.timed_out);
    assert_eq!(summary.snapshot.active_animations, 0);
    assert!(summary.snapshot.buttons.iter().all(|b| b.enabled));
}

#[test]
fn test_frame_trace_serializes_as_json() {
    let mut config = AppConfig::default();
    config.timing.fps = 10;
    let (_, frames) = run(&config, "0:scale");

    let first = serde_json::to_value(&frames[0]).unwrap();
    assert_eq!(first["frame"], 0);
    assert_eq!(first["presses"][0]["kind"], "scale");
    assert_eq!(first["snapshot"]["buttons"][2]["enabled"], false);

    let last = frames.last().unwrap();
    let json = serde_json::to_value(last).unwrap();
    assert_eq!(json["events"][0]["kind"], "Ended");
}

#[test]
fn test_config_file_drives_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        serde_json::json!({
            "screen": { "container_width": 400, "container_height": 800 },
            "timing": { "fps": 30 }
        })
        .to_string(),
    )
    .unwrap();

    let config = AppConfig::load(&path);
    config.validate().unwrap();
    let (summary, _) = run(&config, "0:translate");

    assert_eq!(summary.snapshot.container_width, 400.0);
    assert_eq!(summary.snapshot.views[0].translation_x, 0.0);
    // 单程 0.3 秒，往返共 0.6 秒
    assert!((18..=20).contains(&summary.frames));
}
