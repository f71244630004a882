/*
 * Fixed greeting provider
 *
 *  Copyright (C) 2025 Hiroshi KUWAGATA <kgt9221@gmail.com>
 */

//!
//! サブコマンドの処理を提供するモジュール
//!
//! `cmd_args::Options::build_context()`がサブコマンド毎のコンテキストを生成
//! し、`main`がそれを実行する。
//!

pub(crate) mod commands;
pub(crate) mod hello;

use anyhow::Result;

///
/// サブコマンドの実行単位を表すトレイト
///
pub(crate) trait CommandContext {
    ///
    /// サブコマンドの実行
    ///
    /// # 戻り値
    /// 標準出力への書き込みに失敗した場合などはエラー情報を`Err()`でラップし
    /// て返す。
    ///
    fn exec(&self) -> Result<()>;
}
