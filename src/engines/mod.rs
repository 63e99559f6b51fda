// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod cache;
pub mod capability;
pub mod definition;
pub mod loader;
pub mod resolver;
pub mod router;
pub mod script_engine;
pub mod traits;
