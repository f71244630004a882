/*
 * Fixed greeting provider
 *
 *  Copyright (C) 2025 Hiroshi KUWAGATA <kgt9221@gmail.com>
 */

//! ライブラリ用の公開モジュール定義

pub mod greeting;

pub use greeting::{GREETING, GreetingProvider, hello};
