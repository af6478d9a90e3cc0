//! Reads port definitions in the `name:state:timeout:device,options` style of
//! serial-to-network proxies and prints the parsed arguments.
//!
//! Each line is split on `:` first, then the device part on `,`, then any
//! device field holding several words on whitespace. Every level decodes its
//! own quotes and escapes.
//!
//! Run with:
//!
//! ```text
//! cargo run --example connection_options
//! ```

use strargv::{Separators, baud, scan, tokenize};

const CONFIG: &str = "
3023:raw:100:ipmisol,lan -U ipmiusr -P test -p 9001 localhost,9600
3024:telnet:0000:serialdev,/dev/ttyS0,115200N81,LOCAL
3025:raw:600:serialdev,/dev/ttyUSB0,19200N81
3026:raw:abc:serialdev,/dev/ttyS1,9600
3027:raw:0:serialdev,/dev/ttyS2,14400
3028:raw:0:serialdev,'/dev/ttyS3
";

fn main() {
    let colon = Separators::from(":");
    let comma = Separators::from(",");

    for line in CONFIG.lines().filter(|l| !l.trim().is_empty()) {
        let fields = match tokenize(line, Some(&colon)) {
            Ok(fields) if fields.len() == 4 => fields,
            Ok(fields) => {
                eprintln!("{line}: expected 4 fields, got {}", fields.len());
                continue;
            }
            Err(e) => {
                eprintln!("{line}: {e}");
                continue;
            }
        };

        let port = fields[0].to_string();
        let timeout = fields[2].to_string();
        let Some(timeout) = scan::scan_uint(&timeout) else {
            eprintln!("port {port}: invalid timeout {timeout:?}");
            continue;
        };

        let device = match tokenize(&fields[3], Some(&comma)) {
            Ok(device) => device,
            Err(e) => {
                eprintln!("port {port}: {e}");
                continue;
            }
        };
        println!("port {port} ({}, timeout {timeout}s)", &fields[1]);

        for (i, field) in device.iter().enumerate() {
            println!("  device[{i}] = {field:?}");

            match tokenize(field, None) {
                Ok(words) if words.len() > 1 => println!("    options {words:?}"),
                Ok(_) => {}
                Err(e) => eprintln!("    {e}"),
            }

            let field = field.to_string();
            let end = field
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(field.len());
            if let Some(rate) = scan::scan_uint(&field[..end]) {
                match baud::speed_for_rate(rate) {
                    Some(speed) => println!("    speed {speed} (termios {:#o})", speed.bits()),
                    None => println!("    unsupported speed {rate}"),
                }
            }
        }
    }
}
