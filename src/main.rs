// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/steganos-core

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use steganos_core::cli::{decode_image, encode_image};
use steganos_core::Channel;

#[derive(Parser)]
#[command(name = "steganos")]
#[command(author, version, about = "Hide and recover text messages in raster images", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Embed a message into a carrier image
    #[command(alias = "e")]
    Encode {
        /// Carrier image to read (any decodable format)
        source: PathBuf,

        /// Payload image to write (lossless: .png or .bmp)
        target: PathBuf,

        /// Message text to embed (single-byte characters)
        message: String,

        /// Channel that carries the message bytes
        #[arg(long, default_value = "red", value_parser = parse_channel)]
        channel: Channel,
    },

    /// Recover a message from a payload image
    #[command(alias = "d")]
    Decode {
        /// Payload image to read
        source: PathBuf,

        /// Channel that carries the message bytes
        #[arg(long, default_value = "red", value_parser = parse_channel)]
        channel: Channel,
    },
}

fn parse_channel(s: &str) -> Result<Channel, String> {
    s.parse()
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encode { source, target, message, channel } => {
            match encode_image(&source, &target, &message, channel) {
                Ok(outcome) => {
                    println!(
                        "Embedded {} bytes into {} ({} bytes capacity)",
                        outcome.embedded_bytes,
                        target.display(),
                        outcome.capacity
                    );
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }

        Commands::Decode { source, channel } => match decode_image(&source, channel) {
            Ok(message) => {
                println!("{message}");
                Ok(())
            }
            Err(e) => Err(e),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
