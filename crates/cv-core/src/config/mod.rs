//! # Pure Data Module / 纯数据模块 - Data Transfer Objects Only
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Define configuration data structures / 定义配置数据结构
//! - ✅ Provide TOML → DTO mapping / 提供 TOML → DTO 的映射
//!
//! Reading files is the infrastructure layer's job.

mod app_config;

pub use app_config::{AppConfig, EditingConfig, LogConfig, SessionConfig};
