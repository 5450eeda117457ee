use std::{fmt::Display, path::PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(version, about = "Build and inspect Modbus PDUs", long_about = None)]
pub struct Cli {
    /// Offset added to every address index
    #[arg(long, default_value = "-1", allow_negative_numbers = true)]
    pub offset: i32,

    /// Treat register values as unsigned unless a type is given
    #[arg(long)]
    pub unsigned: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Run a single command and exit instead of starting the shell
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

#[derive(Parser, Debug)]
#[command()]
pub struct Interactive {
    #[command(subcommand)]
    pub command: InteractiveCommands,
}

#[derive(Subcommand, Debug)]
pub enum InteractiveCommands {
    /// Build a read request
    Read(ReadArgs),

    /// Build a write request
    Write(WriteArgs),

    /// Build the response a server sends
    Respond(RespondArgs),

    /// Build an exception response
    Exception(ExceptionArgs),

    /// Check a write acknowledgement against its request
    Validate(ValidateArgs),

    /// Split a PDU into function code and payload
    Inspect(InspectArgs),

    /// Show the IEEE-754 bits of a float
    #[command(allow_negative_numbers = true)]
    Float { value: f32 },

    /// Turn binary digits back into a float
    Bin { digits: String },

    /// Show the binary digits of an integer
    Int { value: u64 },

    /// Export the previously printed table
    Export(ExportArgs),

    /// Set configuration
    Set(SetArgs),

    /// Exit the program
    Exit,
}

impl Display for InteractiveCommands {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            InteractiveCommands::Read(_) => "Read",
            InteractiveCommands::Write(_) => "Write",
            InteractiveCommands::Respond(_) => "Respond",
            InteractiveCommands::Exception(_) => "Exception",
            InteractiveCommands::Validate(_) => "Validate",
            InteractiveCommands::Inspect(_) => "Inspect",
            InteractiveCommands::Float { .. } => "Float",
            InteractiveCommands::Bin { .. } => "Bin",
            InteractiveCommands::Int { .. } => "Int",
            InteractiveCommands::Export(_) => "Export",
            InteractiveCommands::Set(_) => "Set",
            InteractiveCommands::Exit => "Exit",
        };
        f.write_str(name)
    }
}

#[derive(Args, Debug)]
pub struct ReadArgs {
    /// Address to start reading from
    pub address: String,

    /// Number of addresses to read
    #[arg(default_value = "1")]
    pub length: u16,
}

#[derive(Args, Debug)]
#[command(allow_negative_numbers = true)]
pub struct WriteArgs {
    /// Address to start writing to
    pub address: String,

    /// Values to write
    #[arg(required = true)]
    pub values: Vec<String>,

    #[command(flatten)]
    pub format: ValueFormat,

    /// Use the single coil/register function
    #[arg(long)]
    pub single: bool,
}

#[derive(Args, Debug)]
#[command(allow_negative_numbers = true)]
pub struct RespondArgs {
    /// Address the request started at
    pub address: String,

    /// Values read, or written for --write
    #[arg(required = true)]
    pub values: Vec<String>,

    #[command(flatten)]
    pub format: ValueFormat,

    /// Acknowledge a write instead of answering a read
    #[arg(long)]
    pub write: bool,

    /// Acknowledge a single coil/register write
    #[arg(long, requires = "write")]
    pub single: bool,
}

#[derive(Args, Debug)]
pub struct ValueFormat {
    /// Datatype of register values (coils take true/false/on/off/1/0, or a raw word with Hex)
    #[arg(long = "type", value_enum)]
    pub datatype: Option<ValueType>,

    /// Register order for 32-bit values
    #[arg(long = "order", value_enum, default_value = "HL")]
    pub order: WordOrder,
}

#[derive(Debug, PartialEq, Clone, Copy, ValueEnum)]
#[value(rename_all = "PascalCase")]
pub enum ValueType {
    U16,
    I16,
    F32,
    Hex,
    Bin,
}

#[derive(Debug, PartialEq, Clone, Copy, ValueEnum)]
#[value(rename_all = "UPPER")]
pub enum WordOrder {
    /// First word low
    LH,

    /// First word high
    HL,
}

#[derive(Args, Debug)]
pub struct ExceptionArgs {
    /// Function code of the failed request
    pub function: u8,

    /// Exception code
    pub code: u8,
}

#[derive(Args, Debug)]
#[command(allow_negative_numbers = true)]
pub struct ValidateArgs {
    /// Response PDU as hex, function code included
    pub pdu: String,

    /// Address of the original request
    pub address: String,

    /// Value written by a single write
    #[arg(long)]
    pub value: Option<i32>,

    /// Quantity written by a multiple write
    #[arg(long)]
    pub quantity: Option<u16>,

    /// Read the echoed field as unsigned
    #[arg(long)]
    pub unsigned: bool,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// PDU as hex
    pub pdu: String,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// The file to write to
    pub filename: PathBuf,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    #[command(subcommand)]
    pub command: SetCommands,
}

#[derive(Subcommand, Debug)]
pub enum SetCommands {
    /// Set address offset
    #[command(allow_negative_numbers = true)]
    Offset { offset: i32 },

    /// Set whether registers default to signed
    Signed {
        #[arg(action = ArgAction::Set)]
        signed: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
        Interactive::command().debug_assert();
    }

    #[test]
    fn parse_write() {
        let cmd = Interactive::try_parse_from(["modbus-pdu", "write", "400001", "-5", "7", "--type", "I16", "--single"]).unwrap();
        match cmd.command {
            InteractiveCommands::Write(args) => {
                assert_eq!(args.values, vec!["-5", "7"]);
                assert_eq!(args.format.datatype, Some(ValueType::I16));
                assert_eq!(args.format.order, WordOrder::HL);
                assert!(args.single);
            }
            other => panic!("unexpected command {other}"),
        }
    }

    #[test]
    fn parse_set_signed() {
        let cmd = Interactive::try_parse_from(["modbus-pdu", "set", "signed", "false"]).unwrap();
        assert!(matches!(
            cmd.command,
            InteractiveCommands::Set(SetArgs {
                command: SetCommands::Signed { signed: false }
            })
        ));
    }
}
