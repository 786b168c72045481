/*!
Text reports for the hash catalog.
*/

use std::io::Write;

use log::info;

use crate::core::config::VerifyConfig;
use crate::core::constants::listing::{BITS_WIDTH, NAME_WIDTH, TYPE_WIDTH};
use crate::core::descriptor::HashDescriptor;
use crate::core::error::Result;
use crate::core::verify::{verify_descriptors, HashVerification};

fn type_label(descriptor: &HashDescriptor) -> &'static str {
    if descriptor.is_mock() {
        "MOCK"
    } else if descriptor.is_crypto() {
        "CRYPTO"
    } else {
        ""
    }
}

/// Write the hash table, or one bare name per line
pub fn write_hash_list<W: Write>(out: &mut W, descriptors: &[HashDescriptor], name_only: bool) -> Result<()> {
    if name_only {
        for d in descriptors {
            writeln!(out, "{}", d.name())?;
        }
        return Ok(());
    }

    writeln!(out, "Hashnames can be supplied using any case letters.")?;
    writeln!(out)?;
    writeln!(
        out,
        "{:<nw$} {:>bw$} {:>tw$} {}",
        "Name", "Bits", "Type", "Description",
        nw = NAME_WIDTH, bw = BITS_WIDTH, tw = TYPE_WIDTH
    )?;
    writeln!(
        out,
        "{:<nw$} {:>bw$} {:>tw$} {}",
        "----", "----", "----", "-----------",
        nw = NAME_WIDTH, bw = BITS_WIDTH, tw = TYPE_WIDTH
    )?;
    for d in descriptors {
        writeln!(
            out,
            "{:<nw$} {:>bw$} {:>tw$} {}",
            d.name(), d.bits(), type_label(d), d.description(),
            nw = NAME_WIDTH, bw = BITS_WIDTH, tw = TYPE_WIDTH
        )?;
    }
    Ok(())
}

/// Write one verification block
pub fn write_result<W: Write>(out: &mut W, result: &HashVerification, verbose: bool) -> Result<()> {
    writeln!(out, "{:<nw$} {}", result.name(), result.status(), nw = NAME_WIDTH)?;
    if verbose {
        for r in result.framings() {
            writeln!(
                out,
                "    Verification value {:>2} 0x{:08X} ..... {}",
                r.endian.tag(),
                r.actual,
                r.outcome.message()
            )?;
        }
    }
    Ok(())
}

/// Verify every descriptor and report; true if none failed
pub fn write_verification<W: Write>(out: &mut W, descriptors: &[HashDescriptor], config: &VerifyConfig) -> Result<bool> {
    config.validate()?;
    let results = verify_descriptors(descriptors, config);

    for result in &results {
        write_result(out, result, config.verbose)?;
    }

    let failed = results.iter().filter(|r| !r.passed()).count();
    writeln!(out)?;
    if failed == 0 {
        writeln!(out, "All {} hashes passed verification.", results.len())?;
    } else {
        writeln!(out, "{} of {} hashes failed verification.", failed, results.len())?;
    }
    info!("Verified {} hashes, {} failed", results.len(), failed);

    Ok(failed == 0)
}
