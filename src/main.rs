extern crate env_logger;
extern crate log;
extern crate structopt;

mod mem;

use crate::mem::MemError;
use std::fmt::{self, Display};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;
use structopt::StructOpt;

const MEM_EXTENSION: &str = "mem";

#[derive(StructOpt)]
#[structopt(about = "Converts .bin files (raw bytes) to .mem files (ASCII hex \
                     numbers) for consumption by Verilog's $readmemh()")]
struct Args {
    #[structopt(parse(from_os_str))]
    /// The .bin file to convert.
    input: PathBuf,
    #[structopt(long = "output", parse(from_os_str))]
    /// Path of the generated .mem file. Defaults to the input path with its
    /// extension replaced by `.mem`.
    output: Option<PathBuf>,
}

#[derive(Debug)]
pub enum Error {
    Input(PathBuf, io::Error),
    Output(PathBuf, io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Input(ref path, ref err) => {
                write!(f, "cannot read `{}`: {}", path.display(), err)
            }
            Error::Output(ref path, ref err) => {
                write!(f, "cannot write `{}`: {}", path.display(), err)
            }
        }
    }
}

fn main() {
    env_logger::init();

    match run(Args::from_args()) {
        Ok(_) => process::exit(0),
        Err(why) => {
            eprintln!("error: {}", why);
            process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<(), Error> {
    let Args { input, output } = args;
    let out_path = output.unwrap_or_else(|| default_out_path(&input));

    // open the input first, so a bad input path does not leave behind an
    // empty output file
    let src = File::open(&input).map_err(|err| Error::Input(input.clone(), err))?;
    let dst = File::create(&out_path).map_err(|err| Error::Output(out_path.clone(), err))?;

    let mut dst = BufWriter::new(dst);

    mem::transcode(BufReader::new(src), &mut dst).map_err(|err| match err {
        MemError::Read(err) => Error::Input(input, err),
        MemError::Write(err) => Error::Output(out_path.clone(), err),
    })?;

    dst.flush().map_err(|err| Error::Output(out_path, err))
}

fn default_out_path(input: &Path) -> PathBuf {
    input.with_extension(MEM_EXTENSION)
}
