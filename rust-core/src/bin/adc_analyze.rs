//! adc-analyze command-line interface.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use adc_quality::adc::{diagnose, AdcBudget, AdcParams, SAMPLE_ADC_DATA};
use adc_quality::error::AdcError;
use adc_quality::spectrum::{AnalyzerConfig, SpectrumAnalyzer};
use adc_quality::units::{format_si, parse_samples, parse_si_strict};
use anyhow::{Context, Result};
use clap::{ArgAction, Parser};

#[derive(Parser)]
#[command(name = "adc-analyze")]
#[command(about = "Measure SNR, SINAD, THD and ENOB of an ADC capture", long_about = None)]
#[command(version)]
struct Cli {
    /// Sample file (comma/space/newline separated codes), "-" for stdin.
    /// Uses the bundled example capture when omitted.
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// ADC resolution in bits
    #[arg(short, long, default_value_t = 12)]
    bits: u32,

    /// ADC reference voltage
    #[arg(long, default_value = "3.3", value_parser = parse_si_strict)]
    vref: f64,

    /// ADC clock
    #[arg(long, default_value = "8M", value_parser = parse_si_strict)]
    clock: f64,

    /// Oversampling ratio
    #[arg(long, default_value = "1", value_parser = parse_si_strict)]
    osr: f64,

    /// Sample-and-hold capacitance
    #[arg(long, default_value = "5p", value_parser = parse_si_strict)]
    csh: f64,

    /// Sampling switch resistance
    #[arg(long, default_value = "2k", value_parser = parse_si_strict)]
    rsw: f64,

    /// External source resistance
    #[arg(long, default_value = "50k", value_parser = parse_si_strict)]
    rext: f64,

    /// RMS clock jitter
    #[arg(long, default_value = "40p", value_parser = parse_si_strict)]
    jitter: f64,

    /// Converter noise floor (dBFS)
    #[arg(long, default_value = "-70", value_parser = parse_si_strict, allow_hyphen_values = true)]
    floor: f64,

    /// Converter THD (dBFS)
    #[arg(long, default_value = "-73", value_parser = parse_si_strict, allow_hyphen_values = true)]
    thd: f64,

    /// Input signal frequency
    #[arg(long, default_value = "10k", value_parser = parse_si_strict)]
    freq: f64,

    /// Input signal amplitude, peak to peak
    #[arg(long, default_value = "2", value_parser = parse_si_strict)]
    vpp: f64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn params(&self) -> AdcParams {
        AdcParams {
            v_ref: self.vref,
            n_bits: self.bits,
            clock_hz: self.clock,
            osr: self.osr,
            csh: self.csh,
            r_sw: self.rsw,
            r_ext: self.rext,
            jitter_s: self.jitter,
            noise_floor_dbfs: self.floor,
            thd_dbfs: self.thd,
            signal_hz: self.freq,
            signal_vpp: self.vpp,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let samples = load_samples(cli.input.as_ref())?;
    tracing::info!(count = samples.len(), "samples loaded");

    let params = cli.params();
    let budget = AdcBudget::from_params(&params);
    print_budget(&budget);

    let analyzer = SpectrumAnalyzer::new(AnalyzerConfig {
        n_bits: params.n_bits,
        ..AnalyzerConfig::default()
    });
    let result = analyzer
        .analyze(&samples)
        .context("cannot analyze capture")?;

    println!();
    println!(
        "Measured ({} samples, {:?} window, fundamental bin {})",
        samples.len(),
        result.window,
        result.k0
    );
    println!("  SNR          {}", format_si(result.snr_db, "dB", 2));
    println!("  SINAD        {}", format_si(result.sinad_db, "dB", 2));
    println!("  ENOB         {}", format_si(result.enob_bits, "bits", 1));
    println!("  Noise floor  {}", format_si(result.noise_floor_dbfs_bin, "dB", 2));
    println!("  THD          {}", format_si(result.thd_db, "dB", 2));

    println!();
    for limitation in diagnose(budget.snr_jitter_db, &result) {
        println!("{}", limitation);
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn load_samples(input: Option<&PathBuf>) -> Result<Vec<f64>> {
    let Some(path) = input else {
        tracing::info!("no input given, using bundled example capture");
        return Ok(SAMPLE_ADC_DATA.to_vec());
    };

    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read samples from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };

    let samples = parse_samples(&text);
    if samples.is_empty() {
        return Err(AdcError::NoSamples.into());
    }
    Ok(samples)
}

fn print_budget(b: &AdcBudget) {
    println!("Theoretical");
    println!(
        "  LSB / SNRq           {} / {}",
        format_si(b.lsb, "V", 2),
        format_si(b.snr_quant_db, "dB", 2)
    );
    println!(
        "  f_cross / SNRclk     {} / {}",
        format_si(b.jitter_crossover_hz, "Hz", 2),
        format_si(b.snr_jitter_db, "dB", 2)
    );
    println!(
        "  SNRest / SINADest    {} / {}",
        format_si(b.snr_est_db, "dB", 2),
        format_si(b.sinad_est_db, "dB", 2)
    );
    println!(
        "  t_acq / cycles       {} / {}",
        format_si(b.t_acq, "s", 2),
        format_si(b.acq_cycles, "", 2)
    );
    println!(
        "  C_buf range          {} ... {}",
        format_si(b.cbuf.0, "F", 2),
        format_si(b.cbuf.1, "F", 2)
    );
}
