/*
 * Fixed greeting provider
 *
 *  Copyright (C) 2025 Hiroshi KUWAGATA <kgt9221@gmail.com>
 */

//!
//! 挨拶文字列を出力するコマンドのエントリポイント
//!

mod cmd_args;
pub(crate) mod command;

use std::process::ExitCode;

use anyhow::Result;

///
/// プログラムのエントリポイント
///
/// # 注記
/// 失敗時はエラー内容を標準エラー出力へ書き出し、終了コード1で終了する。オプ
/// ションの書式エラーはclap側で終了コード2として処理される。
///
fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

///
/// オプションの解釈からサブコマンドの実行までを行う
///
/// # 戻り値
/// サブコマンド(省略時は"hello")の実行に失敗した場合はエラー情報を`Err()`で
/// ラップして返す。
///
fn run() -> Result<()> {
    let opts = cmd_args::parse()?;
    let context = opts.build_context()?;

    log::debug!("options parsed");
    context.exec()
}
