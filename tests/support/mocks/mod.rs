// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repos;

pub use article_repos::{FailingArticleRepo, InMemoryArticleRepo};
