use std::error::Error;

use clap::Parser;
use comfy_table::{presets, CellAlignment, Table};
use modbus_pdu::{
    exception_response, numeric, request, response, validate_response, CoilValue, Decodable, ExceptionResponse, FunctionCode,
    ModbusException, Pdu,
};
use rustyline::{completion::Completer, history::MemHistory, Editor, Helper, Highlighter, Hinter, Validator};
use tracing::debug;

use crate::{
    address::Address,
    args::*,
    util::{format_hex, parse_bool, parse_hex, parse_registers, parse_word},
};

pub struct Shell {
    offset: i32,
    signed: bool,
    last_table: Option<Table>,
}

impl Shell {
    pub fn new(offset: i32, signed: bool) -> Self {
        Self {
            offset,
            signed,
            last_table: None,
        }
    }

    pub fn command_loop(&mut self) -> Result<(), Box<dyn Error>> {
        println!("offset = {}", self.offset);
        println!("signed = {}", self.signed);
        println!();

        let config = rustyline::Config::builder().build();
        let helper = InteractiveHelper {};

        let mut rl = Editor::<InteractiveHelper, MemHistory>::with_history(config, MemHistory::new())?;
        rl.set_helper(Some(helper));

        loop {
            match rl.readline("modbus-pdu> ") {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }

                    _ = rl.add_history_entry(line.as_str());

                    println!();

                    let result = match shellwords::split(&line) {
                        Ok(words) => self.handle_command(words),
                        Err(err) => Err(err.into()),
                    };

                    match result {
                        Ok(true) => return Ok(()),
                        Ok(false) => {}
                        Err(err) => println!("{err}"),
                    }

                    println!();
                }
                Err(_) => break,
            }
        }

        Ok(())
    }

    pub fn run_once(&mut self, words: Vec<String>) -> Result<(), Box<dyn Error>> {
        self.handle_command(words).map(|_| ())
    }

    fn handle_command(&mut self, words: Vec<String>) -> Result<bool, Box<dyn Error>> {
        let cmd = Interactive::try_parse_from(std::iter::once("modbus-pdu".to_string()).chain(words))?;

        debug!("Running {} command", cmd.command);

        match &cmd.command {
            InteractiveCommands::Read(args) => self.read(args)?,
            InteractiveCommands::Write(args) => self.write(args)?,
            InteractiveCommands::Respond(args) => self.respond(args)?,
            InteractiveCommands::Exception(args) => {
                let pdu = exception_response(FunctionCode::from(args.function), ModbusException::from(args.code));
                self.print_pdu(&pdu);
            }
            InteractiveCommands::Validate(args) => self.validate(args)?,
            InteractiveCommands::Inspect(args) => self.inspect(args)?,
            InteractiveCommands::Float { value } => {
                self.print_pairs(
                    ["Float", "Binary"],
                    vec![
                        [value.to_string(), numeric::float_to_binary_string(*value)],
                        ["Hex".to_string(), format!("{:08X}", value.to_bits())],
                    ],
                );
            }
            InteractiveCommands::Bin { digits } => {
                let value = numeric::binary_string_to_float(digits)?;
                self.print_pairs(["Binary", "Float"], vec![[digits.clone(), value.to_string()]]);
            }
            InteractiveCommands::Int { value } => {
                self.print_pairs(["Integer", "Binary"], vec![[value.to_string(), numeric::int_to_binary_string(*value)]]);
            }
            InteractiveCommands::Export(args) => self.export_csv(args)?,
            InteractiveCommands::Set(args) => match args.command {
                SetCommands::Offset { offset } => {
                    self.offset = offset;
                    println!("offset = {offset}");
                }
                SetCommands::Signed { signed } => {
                    self.signed = signed;
                    println!("signed = {signed}");
                }
            },
            InteractiveCommands::Exit => return Ok(true),
        }

        Ok(false)
    }

    fn read(&mut self, args: &ReadArgs) -> Result<(), Box<dyn Error>> {
        let address = Address::parse(&args.address, self.offset)?;

        let pdu = match address.kind.read_function() {
            FunctionCode::ReadCoils => request::read_coils(address.index, args.length)?,
            FunctionCode::ReadDiscreteInputs => request::read_discrete_inputs(address.index, args.length)?,
            FunctionCode::ReadInputRegisters => request::read_input_registers(address.index, args.length)?,
            _ => request::read_holding_registers(address.index, args.length)?,
        };

        self.print_pdu(&pdu);

        Ok(())
    }

    fn write(&mut self, args: &WriteArgs) -> Result<(), Box<dyn Error>> {
        let address = Address::parse(&args.address, self.offset)?;
        let pdu = self.write_request(address, &args.values, &args.format, args.single)?;
        self.print_pdu(&pdu);
        Ok(())
    }

    fn write_request(&self, address: Address, values: &[String], format: &ValueFormat, single: bool) -> Result<Vec<u8>, Box<dyn Error>> {
        let function_code = address
            .kind
            .write_function(single)
            .ok_or("Address must start with 0 or 4.")?;

        let pdu = match function_code {
            FunctionCode::WriteSingleCoil => {
                let [value] = values else {
                    return Err("A single coil write takes one value".into());
                };
                request::write_single_coil(address.index, self.coil_value(value, format)?)?
            }
            FunctionCode::WriteMultipleCoils => {
                let values = values.iter().map(|v| parse_bool(v)).collect::<Result<Vec<bool>, _>>()?;
                request::write_multiple_coils(address.index, &values)?
            }
            FunctionCode::WriteSingleRegister => {
                let (registers, signed) = self.registers(values, format)?;
                let [value] = registers.as_slice() else {
                    return Err("A single register write takes one register".into());
                };
                request::write_single_register(address.index, *value, signed)?
            }
            _ => {
                let (registers, signed) = self.registers(values, format)?;
                request::write_multiple_registers(address.index, &registers, signed)?
            }
        };

        Ok(pdu)
    }

    fn respond(&mut self, args: &RespondArgs) -> Result<(), Box<dyn Error>> {
        let address = Address::parse(&args.address, self.offset)?;
        let function_code = match address.kind.write_function(args.single) {
            Some(function_code) if args.write => function_code,
            None if args.write => return Err("Address must start with 0 or 4.".into()),
            _ => address.kind.read_function(),
        };

        let pdu = match function_code {
            FunctionCode::WriteSingleCoil | FunctionCode::WriteSingleRegister => {
                // The acknowledgement echoes the request's value field.
                let request = self.write_request(address, &args.values, &args.format, true)?;
                response::write_single_response(function_code, address.index, &request[3..])?
            }
            FunctionCode::WriteMultipleCoils | FunctionCode::WriteMultipleRegisters => {
                let quantity = if address.kind.is_bit() {
                    args.values.len()
                } else {
                    self.registers(&args.values, &args.format)?.0.len()
                };
                response::write_multiple_response(function_code, address.index, u16::try_from(quantity)?)?
            }
            FunctionCode::ReadCoils | FunctionCode::ReadDiscreteInputs => {
                let values = args.values.iter().map(|v| parse_bool(v)).collect::<Result<Vec<bool>, _>>()?;
                self.print_values(address, values.iter().map(|v| v.to_string().to_uppercase()));
                response::read_bits_response(function_code, &values)?
            }
            _ => {
                let (registers, signed) = self.registers(&args.values, &args.format)?;
                self.print_values(address, registers.iter().map(|v| v.to_string()));
                response::read_registers_response(function_code, &registers, signed)?
            }
        };

        self.print_pdu(&pdu);

        Ok(())
    }

    fn validate(&mut self, args: &ValidateArgs) -> Result<(), Box<dyn Error>> {
        let bytes = parse_hex(&args.pdu)?;
        let pdu = Pdu::decode_from_bytes(&bytes).map_err(|err| format!("Malformed PDU: {err:?}"))?;
        let address = Address::parse(&args.address, self.offset)?;
        let signed = self.signed && !args.unsigned;

        let valid = validate_response(&pdu.body, pdu.function_code, address.index, args.value, args.quantity, signed);

        let verdict = if valid { "VALID" } else { "INVALID" };
        self.print_pairs(["Function", "Result"], vec![[pdu.function_code.to_string(), verdict.to_string()]]);

        Ok(())
    }

    fn inspect(&mut self, args: &InspectArgs) -> Result<(), Box<dyn Error>> {
        let bytes = parse_hex(&args.pdu)?;
        let pdu = Pdu::decode_from_bytes(&bytes).map_err(|err| format!("Malformed PDU: {err:?}"))?;

        let mut rows = vec![["Function".to_string(), pdu.function_code.to_string()]];
        if pdu.function_code.is_exception() {
            let exception = match ExceptionResponse::decode_from_bytes(&bytes) {
                Ok(response) => response.exception.to_string(),
                Err(err) => format!("{err:?}"),
            };
            rows.push(["Exception".to_string(), exception]);
        }
        rows.push(["Payload".to_string(), format_hex(&pdu.body)]);
        rows.push(["Length".to_string(), bytes.len().to_string()]);

        self.print_pairs(["Field", "Value"], rows);

        Ok(())
    }

    fn coil_value(&self, value: &str, format: &ValueFormat) -> Result<CoilValue, Box<dyn Error>> {
        Ok(match format.datatype {
            Some(ValueType::Hex) => CoilValue::Raw(parse_word(value, 16)?),
            _ => CoilValue::Bool(parse_bool(value)?),
        })
    }

    fn registers(&self, values: &[String], format: &ValueFormat) -> Result<(Vec<i32>, bool), Box<dyn Error>> {
        let default = if self.signed { ValueType::I16 } else { ValueType::U16 };
        parse_registers(values, format.datatype.unwrap_or(default), format.order)
    }

    fn print_values(&self, address: Address, values: impl Iterator<Item = String>) {
        let mut table = Table::new();
        table.load_preset(presets::NOTHING);
        table.set_header(["Address", "Value"]);

        for (offset, value) in values.enumerate() {
            table.add_row([address.label(offset, self.offset), value]);
        }

        println!("{table}");
        println!();
    }

    fn print_pdu(&mut self, pdu: &[u8]) {
        if let Some(code) = pdu.first() {
            println!("{}: {}", FunctionCode::from(*code), format_hex(pdu));
            println!();
        }

        let mut table = Table::new();
        table.load_preset(presets::NOTHING);
        table.set_header(["Offset", "Hex", "Dec", "Bin"]);
        table.column_iter_mut().for_each(|c| c.set_cell_alignment(CellAlignment::Right));

        for (offset, byte) in pdu.iter().enumerate() {
            table.add_row([
                offset.to_string(),
                format!("{byte:02X}"),
                byte.to_string(),
                format!("{:0>8}", numeric::int_to_binary_string(*byte)),
            ]);
        }

        println!("{table}");

        self.last_table = Some(table);
    }

    fn print_pairs(&mut self, header: [&str; 2], rows: Vec<[String; 2]>) {
        let mut table = Table::new();
        table.load_preset(presets::NOTHING);
        table.set_header(header);

        for row in rows {
            table.add_row(row);
        }

        println!("{table}");

        self.last_table = Some(table);
    }

    fn export_csv(&self, args: &ExportArgs) -> Result<(), Box<dyn Error>> {
        let table = match &self.last_table {
            Some(table) => table,
            None => {
                println!("Nothing to export");
                return Ok(());
            }
        };

        let mut writer = csv::Writer::from_path(&args.filename)?;

        if let Some(header) = table.header() {
            writer.write_record(header.cell_iter().map(|c| c.content()))?;
        }

        for row in table.row_iter() {
            writer.write_record(row.cell_iter().map(|c| c.content()))?;
        }
        writer.flush()?;

        println!("Exported");

        Ok(())
    }
}

#[derive(Helper, Hinter, Validator, Highlighter)]
struct InteractiveHelper {}

const COMPLETIONS: [&str; 14] = [
    "read ",
    "write ",
    "respond ",
    "exception ",
    "validate ",
    "inspect ",
    "float ",
    "bin ",
    "int ",
    "set offset ",
    "set signed ",
    "export ",
    "help",
    "exit",
];

impl Completer for InteractiveHelper {
    type Candidate = String;

    fn complete(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let matches = COMPLETIONS
            .iter()
            .filter(|cmd| cmd.len() >= pos && cmd.starts_with(line))
            .map(|cmd| String::from(&cmd[pos..]))
            .collect();

        Ok((pos, matches))
    }
}
