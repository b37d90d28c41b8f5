// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod date_parser;
pub mod expiry;
pub mod matcher;
pub mod scrape_service;
