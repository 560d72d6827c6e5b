use std::path::PathBuf;

use clap::Parser;
use universal_unit_converter::{app, config, history::HistoryStore, i18n};

/// 커맨드라인 옵션.
#[derive(Debug, Parser)]
#[command(name = "universal_unit_converter_cli")]
struct Cli {
    /// 언어 코드 (auto/ko-kr/en-us)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 변환 기록 파일 경로 (설정값 대신 사용)
    #[arg(long)]
    history_file: Option<PathBuf>,
}

/// 프로그램의 엔트리 포인트. 설정과 기록을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default(&cli.config)?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    let history_path = cli
        .history_file
        .unwrap_or_else(|| PathBuf::from(&cfg.history_file));
    let mut store = HistoryStore::load(history_path);
    app::run(&mut cfg, &cli.config, &mut store, tr)?;
    Ok(())
}
