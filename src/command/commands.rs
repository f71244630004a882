/*
 * Fixed greeting provider
 *
 *  Copyright (C) 2025 Hiroshi KUWAGATA <kgt9221@gmail.com>
 */

//!
//! サブコマンド"commands"の実装
//!

use anyhow::Result;
use clap::CommandFactory;

use crate::cmd_args::Options;
use super::CommandContext;

///
/// "commands"サブコマンドのコンテキスト情報をパックした構造体
///
struct CommandsCommandContext;

impl CommandsCommandContext {
    ///
    /// コマンド一覧の出力
    ///
    fn print_commands() {
        for (name, description) in collect_commands(&Options::command()) {
            println!("{:<16} {}", name, description);
        }
    }
}

// CommandContextの実装
impl CommandContext for CommandsCommandContext {
    fn exec(&self) -> Result<()> {
        Self::print_commands();
        Ok(())
    }
}

///
/// サブコマンド名と説明の一覧を収集
///
fn collect_commands(cmd: &clap::Command) -> Vec<(String, String)> {
    cmd.get_subcommands()
        .map(|sub| {
            let description = sub
                .get_about()
                .map(|value| value.to_string())
                .unwrap_or_default();

            (sub.get_name().to_string(), description)
        })
        .collect()
}

///
/// コマンドコンテキストの生成
///
pub(crate) fn build_context(
    _opts: &Options,
) -> Result<Box<dyn CommandContext>> {
    Ok(Box::new(CommandsCommandContext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_commands_lists_hello() {
        let entries = collect_commands(&Options::command());
        let names: Vec<&str> = entries
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();

        assert_eq!(names, vec!["hello", "commands"]);
    }
}
