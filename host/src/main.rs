//! # Host
//!
//! 属性动画演示 - 无窗口运行。
//!
//! ## 用法
//!
//! ```bash
//! cargo run -p host -- --press "0:rotate,0.5:shower" --seed 42
//! cargo run -p host -- --config config.json --fps 30 --trace
//! ```
//!
//! 最终快照以 JSON 输出到 stdout；`--trace` 时每帧额外输出一行 JSON。
//! 日志输出到 stderr。

use std::io::Write;
use std::path::PathBuf;

use anim_runtime::MainScreen;
use anyhow::Context;
use clap::Parser;
use host::{AppConfig, ConfigError, HeadlessRunner, PressSchedule};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "host")]
#[command(about = "属性动画演示 - 无窗口宿主")]
#[command(version)]
struct Cli {
    /// 配置文件（默认：config.json）
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    /// 点击计划，如 "0:rotate,0.5:shower"
    #[arg(short, long)]
    press: Option<PressSchedule>,

    /// 随机种子（覆盖配置）
    #[arg(long)]
    seed: Option<u64>,

    /// 帧率（覆盖配置）
    #[arg(long)]
    fps: Option<u32>,

    /// 逐帧输出快照
    #[arg(long)]
    trace: bool,

    /// 日志级别（覆盖配置）
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 日志系统要等配置确定级别后才能安装，加载失败的原因先留着
    let loaded = AppConfig::try_load(&cli.config);
    let mut config = loaded.clone().unwrap_or_default();
    config.apply_overrides(cli.seed, cli.fps, cli.trace, cli.log_level.as_deref());
    config.validate()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level()?)
        .with_writer(std::io::stderr)
        .init();

    match loaded {
        Ok(_) => info!(path = %cli.config.display(), "配置文件加载成功"),
        Err(ConfigError::NotFound(path)) => {
            info!(path = %path.display(), "配置文件不存在，使用默认配置")
        }
        Err(e) => warn!(error = %e, "使用默认配置"),
    }

    let seed = config.seed.unwrap_or_else(rand::random);
    info!(seed, "随机种子");

    let screen = MainScreen::new(config.to_layout(), StdRng::seed_from_u64(seed))
        .context("主界面初始化失败")?;
    let schedule = cli.press.clone().unwrap_or_default();
    let mut runner = HeadlessRunner::new(
        screen,
        schedule,
        config.frame_dt(),
        config.timing.max_seconds,
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let trace_frames = config.debug.trace_frames;
    let summary = runner.run(|frame| -> anyhow::Result<()> {
        if trace_frames {
            serde_json::to_writer(&mut out, frame)?;
            writeln!(out)?;
        }
        Ok(())
    })?;

    serde_json::to_writer_pretty(&mut out, &summary.snapshot)?;
    writeln!(out)?;

    if summary.timed_out {
        warn!(elapsed = summary.elapsed, "达到最长运行时间");
    }
    Ok(())
}
