/*
 * Fixed greeting provider
 *
 *  Copyright (C) 2025 Hiroshi KUWAGATA <kgt9221@gmail.com>
 */

//!
//! ログ機能の初期化を行うモジュール
//!

use std::sync::OnceLock;

use anyhow::{anyhow, Context, Result};
use flexi_logger::{
    Duplicate, FileSpec, LogSpecification, Logger, LoggerHandle, WriteMode,
};

use super::Options;

/// 起動したロガーのハンドル(破棄されるとファイル出力が停止するため保持する)
static LOGGER_HANDLE: OnceLock<LoggerHandle> = OnceLock::new();

///
/// ログ機能の初期化
///
/// # 概要
/// ログ出力先ディレクトリが指定されている場合はそのディレクトリ内のファイル
/// へ、指定されていない場合は標準エラー出力へログを出力する。
///
/// # 引数
/// * `opts` - オプション情報
///
/// # 戻り値
/// 初期化に成功した場合は`Ok(())`を返す。
///
pub(super) fn init(opts: &Options) -> Result<()> {
    let spec = LogSpecification::builder()
        .default(opts.log_level().into())
        .build();

    let logger = Logger::with(spec)
        .format(flexi_logger::detailed_format)
        .write_mode(WriteMode::Direct);

    let logger = if let Some(dir) = opts.log_output() {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("create {} failed", dir.display()))?;

        let file_spec = FileSpec::default()
            .directory(dir)
            .basename(env!("CARGO_PKG_NAME"))
            .suppress_timestamp();

        let duplicate = if opts.log_tee() {
            Duplicate::All
        } else {
            Duplicate::None
        };

        logger
            .log_to_file(file_spec)
            .append()
            .duplicate_to_stderr(duplicate)
    } else {
        logger.log_to_stderr()
    };

    let handle = logger.start().context("logger start")?;

    LOGGER_HANDLE
        .set(handle)
        .map_err(|_| anyhow!("logger already initialized"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn second_init_is_rejected() {
        let opts = Options::try_parse_from(["greeter", "-l", "off"])
            .expect("parse failed");

        init(&opts).expect("first init failed");
        assert!(LOGGER_HANDLE.get().is_some());
        assert!(init(&opts).is_err());
    }
}
