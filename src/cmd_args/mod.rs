/*
 * Fixed greeting provider
 *
 *  Copyright (C) 2025 Hiroshi KUWAGATA <kgt9221@gmail.com>
 */

//!
//! コマンドライン引数を取り扱うモジュール
//!

mod logger;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::command::{CommandContext, commands, hello};

///
/// ログレベルを指し示す列挙子
///
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
#[clap(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum LogLevel {
    /// ログを記録しない
    #[value(alias = "off")]
    None,

    /// エラー情報以上のレベルを記録
    Error,

    /// 警告情報以上のレベルを記録
    Warn,

    /// 一般情報以上のレベルを記録
    Info,

    /// デバッグ情報以上のレベルを記録
    Debug,

    /// トレース情報以上のレベルを記録
    Trace,
}

// Intoトレイトの実装
impl Into<log::LevelFilter> for LogLevel {
    fn into(self) -> log::LevelFilter {
        match self {
            Self::None => log::LevelFilter::Off,
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

// AsRefトレイトの実装
impl AsRef<str> for LogLevel {
    fn as_ref(&self) -> &str {
        match self {
            Self::None => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

///
/// グローバルオプション情報を格納する構造体
///
#[derive(Parser, Debug, Clone)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    about = "固定の挨拶文字列を出力するコマンド",
    version,
    long_about = None,
    subcommand_required = false,
)]
pub struct Options {
    /// 記録するログレベルの指定
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL",
        ignore_case = true)]
    log_level: Option<LogLevel>,

    /// ログの出力先ディレクトリの指定
    #[arg(short = 'L', long = "log-output", value_name = "PATH")]
    log_output: Option<PathBuf>,

    /// ログを標準エラー出力にも同時出力するか否か
    #[arg(long = "log-tee")]
    log_tee: bool,

    /// 設定情報の表示
    #[arg(long = "show-options")]
    show_options: bool,

    /// 実行するサブコマンド
    #[command(subcommand)]
    command: Option<Command>,
}

impl Options {
    ///
    /// ログレベルへのアクセサ
    ///
    /// # 戻り値
    /// 設定されたログレベルを返す。未設定の場合は`Warn`を返す。
    ///
    fn log_level(&self) -> LogLevel {
        self.log_level.unwrap_or(LogLevel::Warn)
    }

    ///
    /// ログの出力先へのアクセサ
    ///
    /// # 戻り値
    /// ログの出力先ディレクトリが指定されている場合は`Some()`で返す。未指定の
    /// 場合は標準エラー出力へ出力するため`None`を返す。
    ///
    fn log_output(&self) -> Option<PathBuf> {
        self.log_output.clone()
    }

    ///
    /// ログの標準エラー出力同時出力フラグへのアクセサ
    ///
    fn log_tee(&self) -> bool {
        self.log_tee
    }

    ///
    /// 実行するサブコマンドへのアクセサ
    ///
    /// # 戻り値
    /// サブコマンドが省略された場合は`Command::Hello`を返す。
    ///
    fn subcommand(&self) -> Command {
        self.command.clone().unwrap_or(Command::Hello)
    }

    ///
    /// 設定内容のバリデーション
    ///
    /// # 戻り値
    /// 設定内容に問題が無い場合は`Ok(())`を返す。
    ///
    fn validate(&self) -> Result<()> {
        if self.log_tee && self.log_output.is_none() {
            return Err(anyhow!("--log-tee requires --log-output"));
        }

        if let Some(path) = &self.log_output {
            if path.exists() && !path.is_dir() {
                return Err(anyhow!("{} is not directory", path.display()));
            }
        }

        Ok(())
    }

    ///
    /// オプション設定内容の表示
    ///
    fn show_options(&self) {
        let log_output = match self.log_output() {
            Some(path) => path.display().to_string(),
            None => "(stderr)".to_string(),
        };

        println!("global options");
        println!("   log level:        {}", self.log_level().as_ref());
        println!("   log output:       {}", log_output);
        println!("   log tee:          {}", self.log_tee());
        println!("   command:          {}", self.subcommand().name());
    }

    ///
    /// サブコマンドのコマンドコンテキストの生成
    ///
    pub(crate) fn build_context(&self) -> Result<Box<dyn CommandContext>> {
        match self.subcommand() {
            Command::Hello => hello::build_context(self),
            Command::Commands => commands::build_context(self),
        }
    }
}

///
/// サブコマンドの定義
///
#[derive(Clone, Debug, PartialEq, Subcommand)]
enum Command {
    /// 挨拶文字列の出力
    #[command(name = "hello", alias = "h")]
    Hello,

    /// サブコマンド一覧の表示
    #[command(name = "commands")]
    Commands,
}

impl Command {
    ///
    /// サブコマンド名の取得
    ///
    fn name(&self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Commands => "commands",
        }
    }
}

///
/// コマンドラインオプションのパース
///
/// # 戻り値
/// 処理に成功した場合はオプション情報をパックしたオブジェクトを`Ok()`でラッ
/// プして返す。失敗した場合はエラー情報を`Err()`でラップして返す。
///
pub(crate) fn parse() -> Result<Arc<Options>> {
    let opts = Options::parse();

    /*
     * 設定情報のバリデーション
     */
    opts.validate()?;

    /*
     * ログ機能の初期化
     */
    logger::init(&opts)?;

    /*
     * 設定情報の表示
     */
    if opts.show_options {
        opts.show_options();
        std::process::exit(0);
    }

    /*
     * 設定情報の返却
     */
    Ok(Arc::new(opts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn missing_subcommand_defaults_to_hello() {
        let opts = Options::try_parse_from(["greeter"]).expect("parse failed");
        assert_eq!(opts.subcommand(), Command::Hello);
        assert_eq!(opts.log_level(), LogLevel::Warn);
        assert!(opts.log_output().is_none());
    }

    #[test]
    fn parse_log_options() {
        let dir = TempDir::new().expect("temp dir");
        let log_arg = dir.path().to_string_lossy().to_string();
        let args = [
            "greeter", "-l", "debug", "-L", &log_arg, "--log-tee", "h",
        ];

        let opts = Options::try_parse_from(args).expect("parse failed");
        assert_eq!(opts.subcommand(), Command::Hello);
        assert_eq!(opts.log_level(), LogLevel::Debug);
        assert_eq!(opts.log_output(), Some(dir.path().to_path_buf()));
        assert!(opts.log_tee());
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn off_is_alias_of_none() {
        let opts = Options::try_parse_from(["greeter", "--log-level", "OFF"])
            .expect("parse failed");
        assert_eq!(opts.log_level(), LogLevel::None);

        let filter: log::LevelFilter = opts.log_level().into();
        assert_eq!(filter, log::LevelFilter::Off);
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let result = Options::try_parse_from(["greeter", "-l", "verbose"]);
        assert!(result.is_err());
    }

    #[test]
    fn log_tee_without_output_is_rejected() {
        let opts = Options::try_parse_from(["greeter", "--log-tee"])
            .expect("parse failed");
        assert!(opts.validate().is_err());
    }

    #[test]
    fn log_output_pointing_to_file_is_rejected() {
        let dir = TempDir::new().expect("temp dir");
        let file_path = dir.path().join("not_a_dir");
        std::fs::write(&file_path, b"x").expect("write failed");
        let file_arg = file_path.to_string_lossy().to_string();

        let opts = Options::try_parse_from(["greeter", "-L", &file_arg])
            .expect("parse failed");
        assert!(opts.validate().is_err());
    }
}
