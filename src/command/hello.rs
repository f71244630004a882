/*
 * Fixed greeting provider
 *
 *  Copyright (C) 2025 Hiroshi KUWAGATA <kgt9221@gmail.com>
 */

//!
//! サブコマンド"hello"の実装
//!

use std::io::{self, Write};

use anyhow::{Context, Result};
use greeter::GreetingProvider;
use log::debug;

use crate::cmd_args::Options;
use super::CommandContext;

///
/// "hello"サブコマンドのコンテキスト情報をパックした構造体
///
struct HelloCommandContext {
    /// 挨拶文字列の提供元
    provider: GreetingProvider,
}

impl HelloCommandContext {
    ///
    /// コンテキストの生成
    ///
    fn new() -> Self {
        Self {
            provider: GreetingProvider::new(),
        }
    }

    ///
    /// 挨拶文字列の書き込み
    ///
    /// # 引数
    /// * `out` - 書き込み先
    ///
    /// # 戻り値
    /// 書き込みに成功した場合は`Ok(())`を返す。
    ///
    fn write_greeting<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.provider.hello())?;
        out.flush()?;
        Ok(())
    }
}

// CommandContextの実装
impl CommandContext for HelloCommandContext {
    fn exec(&self) -> Result<()> {
        debug!("exec hello command");

        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_greeting(&mut out).context("write greeting")
    }
}

///
/// コマンドコンテキストの生成
///
pub(crate) fn build_context(
    _opts: &Options,
) -> Result<Box<dyn CommandContext>> {
    Ok(Box::new(HelloCommandContext::new()))
}
