use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the CRC-32C of an 8-byte message
    Crc {
        /// The message (8 ASCII characters, or 16 hex digits with --hex)
        message: String,

        /// Use bit-serial division instead of the lookup table
        #[arg(long)]
        reference: bool,
    },

    /// Seal a message into a 12-byte frame and print it as hex
    Seal {
        /// The message (8 ASCII characters, or 16 hex digits with --hex)
        message: String,
    },

    /// Check a 12-byte frame given as 24 hex digits
    Validate {
        /// The frame, as hex
        frame: String,
    },

    /// Print the 256-entry lookup table
    Table,

    /// Seal every 8-byte message of a binary file into frames
    SealFile {
        /// File of raw messages (length must be a multiple of 8)
        input: PathBuf,

        /// Destination file for the frames (created or truncated)
        output: PathBuf,
    },

    /// Verify every frame of a binary file
    VerifyFile {
        /// File of consecutive 12-byte frames
        input: PathBuf,
    },

    /// Run the corruption scenarios against the "hiiamtom" frame
    Demo,
}
