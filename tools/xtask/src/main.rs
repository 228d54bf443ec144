//! # xtask - 开发辅助工具
//!
//! 提供本地质量门禁与开发辅助命令。
//!
//! ## 命令
//!
//! - `check-all`: 运行 fmt、clippy、test
//! - `cov-runtime`: 运行 folio-runtime 覆盖率
//! - `cov-workspace`: 运行 workspace 覆盖率
//! - `content-check`: 检查内容文件（结构、空区块）

use std::path::Path;
use std::process::{Command, ExitCode};

use folio_runtime::PortfolioData;

fn run(step: &str, cmd: &mut Command) -> anyhow::Result<()> {
    eprintln!("\n==> {step}");
    let status = cmd.status()?;
    if !status.success() {
        anyhow::bail!("{step} failed with {status}");
    }
    Ok(())
}

fn ensure_cargo_llvm_cov_available() -> anyhow::Result<()> {
    let mut cmd = Command::new("cargo");
    cmd.args(["llvm-cov", "--version"]);
    let status = cmd.status();
    match status {
        Ok(s) if s.success() => Ok(()),
        _ => anyhow::bail!(
            "cargo llvm-cov 不可用。\n\
请先安装：\n\
  - cargo install cargo-llvm-cov\n\
  - rustup component add llvm-tools-preview\n\
然后重试。"
        ),
    }
}

/// 检查内容文件，返回发现的问题数量
fn content_check(path: &Path) -> anyhow::Result<usize> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("无法读取 {}: {e}", path.display()))?;
    let data = PortfolioData::from_json(&text)
        .map_err(|e| anyhow::anyhow!("{} 解析失败: {e}", path.display()))?;

    let mut problems = 0;

    if data.personal.name.trim().is_empty() {
        eprintln!("  ⚠ personal.name 为空");
        problems += 1;
    }
    if data.personal.email.trim().is_empty() {
        eprintln!("  ⚠ personal.email 为空");
        problems += 1;
    }
    for group in &data.skills {
        if group.skills.is_empty() {
            eprintln!("  ⚠ 技能组 {:?} 没有任何条目", group.tier);
            problems += 1;
        }
    }
    for project in &data.projects {
        if project.technologies.is_empty() {
            eprintln!("  ⚠ 项目 \"{}\" 没有技术标签", project.title);
            problems += 1;
        }
    }
    if data.experience.is_empty() {
        eprintln!("  ⚠ experience 为空");
        problems += 1;
    }

    eprintln!(
        "==> {}: {} 个技能组 / {} 段经历 / {} 个项目 / {} 条教育经历 / {} 种语言",
        path.display(),
        data.skills.len(),
        data.experience.len(),
        data.projects.len(),
        data.education.len(),
        data.languages.len(),
    );
    Ok(problems)
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        eprintln!("xtask error: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let sub = args.next().unwrap_or_else(|| "help".to_string());

    match sub.as_str() {
        "check-all" => {
            let mut fmt = Command::new("cargo");
            fmt.args(["fmt", "--all", "--", "--check"]);
            run("cargo fmt --all -- --check", &mut fmt)?;

            let mut clippy = Command::new("cargo");
            clippy.args(["clippy", "--workspace", "--all-targets"]);
            run("cargo clippy --workspace --all-targets", &mut clippy)?;

            let mut test = Command::new("cargo");
            test.args(["test", "--workspace"]);
            run("cargo test --workspace", &mut test)?;
        }
        "cov-runtime" => {
            ensure_cargo_llvm_cov_available()?;

            let mut cov = Command::new("cargo");
            cov.args(["llvm-cov", "-p", "folio-runtime", "--html"]);
            run("cargo llvm-cov -p folio-runtime --html", &mut cov)?;

            eprintln!("\nCoverage HTML: target/llvm-cov/html/index.html");
        }
        "cov-workspace" => {
            ensure_cargo_llvm_cov_available()?;

            // 口径上排除 xtask，以免稀释信号
            let mut cov = Command::new("cargo");
            cov.args(["llvm-cov", "--workspace", "--exclude", "xtask", "--html"]);
            run("cargo llvm-cov --workspace --exclude xtask --html", &mut cov)?;

            eprintln!("\nCoverage HTML: target/llvm-cov/html/index.html");
        }
        "content-check" => {
            let path = args
                .next()
                .ok_or_else(|| anyhow::anyhow!("用法: xtask content-check <content.json>"))?;
            let problems = content_check(Path::new(&path))?;
            if problems > 0 {
                anyhow::bail!("发现 {problems} 个问题");
            }
            eprintln!("==> 内容检查通过");
        }
        _ => {
            eprintln!(
                "用法: cargo run -p xtask -- <command>\n\
\n\
命令：\n\
  check-all       运行 fmt、clippy、test\n\
  cov-runtime     folio-runtime 覆盖率（cargo-llvm-cov）\n\
  cov-workspace   workspace 覆盖率（排除 xtask）\n\
  content-check   检查内容文件"
            );
        }
    }

    Ok(())
}
