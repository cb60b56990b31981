use std::{
    error::Error,
    io::{self, Write},
    path::PathBuf,
};

use clap::{Parser, Subcommand};
use morse_core::{engine::Engine, session::Session};
use morse_table::MorseTable;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod codec;
mod config;
mod practice;

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "morse_cli", version, about = "摩尔斯键盘练习与编解码工具")]
struct Cli {
    /// 配置文件路径（默认：$MORSE_CONFIG 或 ./morse.toml）
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 叠加在标准表之上的 TSV 码表（覆盖配置中的 keyboard.table）
    #[arg(long, global = true)]
    table: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 交互练习（默认）
    Practice,
    /// 文本 -> 电码
    Encode {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// 电码 -> 文本（字符间空格，单词间 `/`）
    Decode {
        #[arg(required = true)]
        code: Vec<String>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let (config_path, config) = Config::load(cli.config.as_deref())?;
    init_tracing(&config.logging.level);
    if let Some(p) = &config_path {
        info!(path = %p.display(), "loaded config");
    }

    let table = load_table(cli.table.or_else(|| config.keyboard.table.clone()))?;
    config.check_table(&table)?;
    let placeholder = config.placeholder();

    let mut out = io::stdout().lock();
    match cli.command.unwrap_or(Command::Practice) {
        Command::Practice => {
            let engine = Engine::new(table).placeholder(placeholder);
            let mut session = Session::new(engine);
            practice::repl(&mut session, io::stdin().lock(), &mut out)?;
        }
        Command::Encode { text } => {
            writeln!(out, "{}", codec::encode(&table, &text.join(" "), placeholder))?;
        }
        Command::Decode { code } => {
            writeln!(out, "{}", codec::decode(&table, &code.join(" "), placeholder)?)?;
        }
    }
    Ok(())
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_table(extra: Option<PathBuf>) -> Result<MorseTable, morse_table::TableError> {
    let standard = MorseTable::standard();
    match extra {
        Some(path) => standard.with_overrides(&MorseTable::from_path(path)?),
        None => Ok(standard),
    }
}
