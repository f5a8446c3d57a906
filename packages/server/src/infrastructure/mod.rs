//! Infrastructure 層
//!
//! ドメイン層が定義する trait の具体的な実装（永続化）と、
//! UI 層が使用する DTO を提供します。

pub mod dto;
pub mod repository;
