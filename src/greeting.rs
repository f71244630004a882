/*
 * Fixed greeting provider
 *
 *  Copyright (C) 2025 Hiroshi KUWAGATA <kgt9221@gmail.com>
 */

//!
//! 挨拶文字列の提供を行うモジュール
//!

/// 挨拶文字列
pub const GREETING: &str = "Hello from Java 17 app!";

///
/// 挨拶文字列の取得
///
/// # 概要
/// 常に同一の挨拶文字列を返す。状態を持たないため任意のスレッドから同時に呼
/// び出してよい。
///
/// # 戻り値
/// 挨拶文字列
///
pub fn hello() -> &'static str {
    GREETING
}

///
/// 挨拶文字列を提供するオブジェクト
///
/// # 注記
/// インスタンスとして保持したい呼び出し元向けのゼロサイズ型。
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GreetingProvider;

impl GreetingProvider {
    ///
    /// オブジェクトの生成
    ///
    pub fn new() -> Self {
        Self
    }

    ///
    /// 挨拶文字列の取得
    ///
    /// # 戻り値
    /// `hello()`と同一の挨拶文字列
    ///
    pub fn hello(&self) -> &'static str {
        hello()
    }
}
