use miette::{bail, Result};

use int64_buffer::{Int64, Int64Error, Source, Storage};

#[derive(Debug, Clone, Copy)]
pub struct Format<'a> {
    pub radix: u32,
    pub separator: &'a str,
}

pub fn inspect_value(value: &str, format: Format) -> Result<()> {
    let source = Source::detect(value).map_err(Int64Error::into_err_report)?;
    let int = Int64::new(source).map_err(Int64Error::into_err_report)?;
    print(&int, format)
}

pub fn inspect_halves(hi: &str, lo: &str, format: Format) -> Result<()> {
    let int = Int64::from_halves(parse_half(hi)?, parse_half(lo)?);
    print(&int, format)
}

pub fn read_file(file_path: &str, offset: usize, format: Format) -> Result<()> {
    let bytes = match std::fs::read(file_path) {
        Ok(bytes) => bytes,
        Err(error) => bail!(error),
    };
    let int = Int64::view(&bytes[..], offset).map_err(Int64Error::into_err_report)?;
    print(&int, format)
}

pub fn write_file(file_path: &str, value: &str, offset: usize) -> Result<()> {
    let mut bytes = match std::fs::read(file_path) {
        Ok(bytes) => bytes,
        Err(error) => bail!(error),
    };
    let source = Source::detect(value).map_err(Int64Error::into_err_report)?;

    let written = {
        let mut int = Int64::view(&mut bytes[..], offset).map_err(Int64Error::into_err_report)?;
        int.set(source).map_err(Int64Error::into_err_report)?;
        int.detach()
    };
    log::info!("writing {written:?} to {file_path} at offset {offset}");

    if let Err(error) = std::fs::write(file_path, &bytes) {
        bail!(error);
    }
    println!("{written:?}");
    Ok(())
}

fn print<S: Storage>(int: &Int64<S>, format: Format) -> Result<()> {
    let value = int
        .to_string_radix(format.radix)
        .map_err(Int64Error::into_err_report)?;
    println!("value:  {value}");
    println!("octets: {}", int.to_octet_string(format.separator));
    println!("{int:?}");
    Ok(())
}

fn parse_half(src: &str) -> Result<u32> {
    let parsed = match src.strip_prefix("0x") {
        Some(digits) => u32::from_str_radix(digits, 16),
        None => src.parse::<u32>(),
    };
    match parsed {
        Ok(half) => Ok(half),
        Err(error) => bail!("Invalid 32-bit half {src:?}: {error}"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    use super::{inspect_halves, inspect_value, parse_half, read_file, write_file, Format};

    const FORMAT: Format = Format {
        radix: 10,
        separator: "",
    };

    fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("int64-buffer-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn halves() {
        assert_eq!(parse_half("42").unwrap(), 42);
        assert_eq!(parse_half("0xffffffff").unwrap(), u32::MAX);
        assert!(parse_half("4294967296").is_err());
        assert!(parse_half("-1").is_err());
    }

    #[test]
    fn inspect_values() {
        assert!(inspect_value("-1", FORMAT).is_ok());
        assert!(inspect_value("0x7fffffffffffffff", FORMAT).is_ok());
        assert!(inspect_value("ff", FORMAT).is_err());
        assert!(inspect_value("0xfg", FORMAT).is_err());
        assert!(inspect_value("1e30", FORMAT).is_err());

        let bad_radix = Format {
            radix: 1,
            separator: "",
        };
        assert!(inspect_value("42", bad_radix).is_err());
    }

    #[test]
    fn inspect_raw_halves() {
        assert!(inspect_halves("0x00200000", "0", FORMAT).is_ok());
        assert!(inspect_halves("1", "0xffffffff", FORMAT).is_ok());
        assert!(inspect_halves("0x100000000", "0", FORMAT).is_err());
        assert!(inspect_halves("1", "lo", FORMAT).is_err());
    }

    #[test]
    fn write_then_read() {
        let path = temp_file("write", &[0xaa; 10]);
        let file_path = path.to_str().unwrap();

        write_file(file_path, "-2", 1).unwrap();
        assert_eq!(
            std::fs::read(&path).unwrap(),
            [0xaa, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe, 0xaa]
        );
        read_file(file_path, 1, FORMAT).unwrap();

        assert!(write_file(file_path, "0x01", 3).is_err());
        assert!(read_file(file_path, 3, FORMAT).is_err());
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn failed_write_leaves_file() {
        let path = temp_file("unsupported", &[0; 8]);
        let file_path = path.to_str().unwrap();

        assert!(write_file(file_path, "ff", 0).is_err());
        assert!(write_file(file_path, "1e30", 0).is_err());
        assert_eq!(std::fs::read(&path).unwrap(), [0; 8]);
        std::fs::remove_file(path).unwrap();
    }
}
