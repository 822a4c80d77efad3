//! One run of the tool: acquire, multiply, report.

use crate::cli::{InputSource, RunConfig};
use crate::error::Result;
use crate::generate::{entropy_seed, random_pair};
use crate::input::{read_pair, read_pair_from_file};
use crate::matrix::Matrix;
use crate::threaded::partition::hardware_workers;
use crate::{multiply, multiply_parallel_with};
use log::{debug, info};
use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

/// What a finished run produced.
#[derive(Debug)]
pub struct RunReport {
    pub a: Matrix,
    pub b: Matrix,
    pub c: Matrix,
    /// Input acquisition plus multiplication, printing of C excluded.
    pub elapsed: Duration,
}

/// Writes the mode banners for `config`.
///
/// Always in the same order (input source, parallel, print), whatever
/// order the flags were given in.
pub fn write_banners<W: Write>(config: &RunConfig, out: &mut W) -> std::io::Result<()> {
    match &config.source {
        InputSource::Generate => writeln!(out, "**Matrices will be generated**")?,
        InputSource::File(path) => writeln!(out, "**Input from file {}**", path.display())?,
        InputSource::Terminal => {}
    }
    if config.parallel {
        writeln!(out, "**Parallel mode**")?;
    }
    if config.print {
        writeln!(out, "**Matrices will be printed**")?;
    }
    Ok(())
}

/// Runs one multiplication as described by `config`.
///
/// Terminal input is read from `input`; everything user-visible goes to
/// `out`. Input errors are returned untouched so the caller can pick the
/// exit code.
pub fn run<R: BufRead, W: Write>(config: &RunConfig, input: R, out: &mut W) -> Result<RunReport> {
    let start = Instant::now();
    write_banners(config, out)?;

    let workers = config.threads.unwrap_or_else(hardware_workers);

    let (a, b) = match &config.source {
        InputSource::Terminal => read_pair(input)?,
        InputSource::File(path) => read_pair_from_file(path)?,
        InputSource::Generate => {
            let seed = config.seed.unwrap_or_else(entropy_seed);
            info!("generation seed {}", seed);
            random_pair(seed, config.parallel.then_some(workers))
        }
    };

    if config.print {
        a.write_named(out, "A")?;
        b.write_named(out, "B")?;
    }

    let data = if config.parallel {
        debug!("parallel multiply with {} workers", workers);
        multiply_parallel_with(&a.data, &b.data, a.rows, a.cols, b.rows, b.cols, workers)
    } else {
        multiply(&a.data, &b.data, a.rows, a.cols, b.rows, b.cols)
    };
    let c = Matrix::from_vec(a.rows, b.cols, data);
    let elapsed = start.elapsed();
    info!("{}x{} * {}x{} done in {:?}", a.rows, a.cols, b.rows, b.cols, elapsed);

    if config.print {
        c.write_named(out, "C")?;
    }
    writeln!(out, "Needed {} ms to finish.", elapsed.as_millis())?;

    Ok(RunReport { a, b, c, elapsed })
}
