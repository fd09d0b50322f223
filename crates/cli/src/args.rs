use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "dirtree", version, about = "ディレクトリツリー表示/サイズ集計ツール")]
pub struct Args {
    /// 対象パス
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}
