use clap::{Parser, ValueEnum};
use data_encoding::{BASE64, HEXLOWER};
use qwire::{Encoding, MessageType, MessageWriter, Value, WriterOptions};
use std::io::Read;
use std::process;

/// Encode tagged-JSON values into kdb+ IPC messages.
#[derive(Parser)]
#[command(name = "qwire", version, about = "Encode tagged-JSON values into kdb+ IPC messages")]
struct Cli {
    /// Tagged-JSON value to encode, e.g. '{"type": "long", "value": 42}';
    /// reads stdin when omitted or "-"
    value: Option<String>,

    /// Message type carried in the header
    #[arg(short = 't', long, value_enum, default_value_t = MsgType::Sync)]
    msg_type: MsgType,

    /// Negotiated IPC protocol version
    #[arg(short = 'p', long, default_value_t = 3)]
    protocol_version: u8,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Output::Hex)]
    output: Output,

    /// Character encoding for strings, symbols, and error messages
    #[arg(long, value_enum, default_value_t = Charset::Latin1)]
    encoding: Charset,

    /// Keep one-character strings as strings instead of char atoms
    #[arg(long)]
    single_char_strings: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum MsgType {
    Async,
    Sync,
    Response,
}

impl From<MsgType> for MessageType {
    fn from(t: MsgType) -> Self {
        match t {
            MsgType::Async => MessageType::Async,
            MsgType::Sync => MessageType::Sync,
            MsgType::Response => MessageType::Response,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Output {
    Hex,
    Base64,
}

#[derive(Clone, Copy, ValueEnum)]
enum Charset {
    Latin1,
    Utf8,
}

impl From<Charset> for Encoding {
    fn from(c: Charset) -> Self {
        match c {
            Charset::Latin1 => Encoding::Latin1,
            Charset::Utf8 => Encoding::Utf8,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let input = match cli.value.as_deref() {
        Some("-") | None => {
            let mut buffer = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading stdin: {}", e);
                process::exit(1);
            }
            buffer
        }
        Some(text) => text.to_string(),
    };

    let value: Value = match serde_json::from_str(&input) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Error parsing value: {}", e);
            process::exit(1);
        }
    };

    let writer = MessageWriter::new(cli.protocol_version)
        .with_encoding(cli.encoding.into())
        .with_options(WriterOptions {
            single_char_strings: cli.single_char_strings,
        });

    match writer.encode(&value, cli.msg_type.into()) {
        Ok(bytes) => {
            let text = match cli.output {
                Output::Hex => HEXLOWER.encode(&bytes),
                Output::Base64 => BASE64.encode(&bytes),
            };
            println!("{}", text);
        }
        Err(e) => {
            eprintln!("Error encoding value: {}", e);
            process::exit(1);
        }
    }
}
