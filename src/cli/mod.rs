//! CLI infrastructure for the fox and sheep search toolkit
//!
//! This module provides the command-line interface for analyzing positions
//! with the different search strategies and playing bot-versus-bot games.

pub mod commands;
pub mod output;
