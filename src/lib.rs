// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理应用程序的配置设置、环境变量和人员名册加载
pub mod config;

/// 领域模块
///
/// 包含核心业务实体和服务：日期解析、到期判定、技能匹配
pub mod domain;

/// 引擎模块
///
/// 实现仪表盘页面的抓取引擎和表格行提取
pub mod engines;

/// 基础设施模块
///
/// 提供外部集成：单槽快照缓存和代理池
pub mod infrastructure;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
