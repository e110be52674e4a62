//! Interactive menu session.
//!
//! A `Session` owns the two live matrices, the handler chain and the random
//! source, and drives the menu loop over any `BufRead`/`Write` pair. The binary
//! runs it on stdin/stdout; tests run it on in-memory buffers.
//!
//! Malformed lines are reported and re-prompted. End of input at any prompt
//! ends the session cleanly.

use crate::config::CalcOptions;
use crate::dispatch::{DispatchContext, HandlerChain};
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Menu code that ends the session.
pub const EXIT_CODE: i64 = 7;

pub struct Session<R, W> {
    input: R,
    output: W,
    chain: HandlerChain<i64>,
    rng: StdRng,
    initial_size: Option<usize>,
    matrices: Option<(Matrix, Matrix)>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, options: &CalcOptions) -> Self {
        Session {
            input,
            output,
            chain: HandlerChain::standard(),
            rng: options.rng(),
            initial_size: options.size,
            matrices: None,
        }
    }

    /// Use a custom handler chain instead of the standard one.
    pub fn with_chain(mut self, chain: HandlerChain<i64>) -> Self {
        self.chain = chain;
        self
    }

    /// The live matrices, once the session has created them.
    pub fn matrices(&self) -> Option<(&Matrix, &Matrix)> {
        self.matrices.as_ref().map(|(a, b)| (a, b))
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu loop until the exit code or end of input.
    pub fn run(&mut self) -> Result<()> {
        match self.run_loop() {
            Err(MatrixError::Io(err)) if err.kind() == io::ErrorKind::UnexpectedEof => {
                info!("input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    fn run_loop(&mut self) -> Result<()> {
        let Session { input, output, chain, rng, initial_size, matrices } = self;

        writeln!(output, "Matrix calculator")?;
        let size = match *initial_size {
            Some(size) => size,
            None => prompt_size(input, output, "Enter the matrix size: ")?,
        };
        let first = Matrix::create_random(size, &mut *rng);
        let second = Matrix::create_random(size, &mut *rng);
        let (a, b) = matrices.insert((first, second));
        info!(size, "session started");

        loop {
            write_menu(output, chain)?;
            let choice = prompt_int(input, output, "Choose an action: ")?;
            if choice == EXIT_CODE {
                debug!("exit requested");
                break;
            }

            let outcome = {
                let mut next_size = || prompt_size(&mut *input, &mut *output, "Enter the size of the new matrices: ");
                let mut ctx = DispatchContext { rng: &mut *rng, next_size: &mut next_size };
                chain.dispatch(choice, a, b, &mut ctx)?
            };
            if let Some(text) = outcome.apply(a, b) {
                write!(output, "{text}")?;
            }
        }
        output.flush()?;
        Ok(())
    }
}

/// One line per handler in chain order, then the exit entry.
fn write_menu<W: Write>(output: &mut W, chain: &HandlerChain<i64>) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "Menu:")?;
    for handler in chain.handlers() {
        writeln!(output, "{}. {}", handler.code, handler.name)?;
    }
    writeln!(output, "{EXIT_CODE}. Exit")
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
    }
    Ok(line)
}

/// Prompt until the user enters a whole number.
fn prompt_int<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<i64> {
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;
        let line = read_line(input)?;
        match line.trim().parse::<i64>() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(output, "Please enter a whole number.")?,
        }
    }
}

/// Prompt until the user enters a size of at least 1.
fn prompt_size<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<usize> {
    loop {
        let value = prompt_int(input, output, prompt)?;
        match usize::try_from(value) {
            Ok(size) if size >= 1 => return Ok(size),
            _ => writeln!(output, "Size must be a positive integer.")?,
        }
    }
}
