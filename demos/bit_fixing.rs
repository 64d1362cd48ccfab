//! End-to-end walk-through of the bit-fixing CPRF.
//!
//! Generates a width-8 master key, evaluates it on the byte `0xA5`,
//! derives a constrained key whose pattern matches that value and one
//! whose pattern does not, and prints the three roots.

use synth_cprf::{block_to_hex, CprfError, SecretKey};

fn main() -> Result<(), CprfError> {
    let msk = SecretKey::generate_with_width(8)?;
    let value = [0xA5u8];

    let tag = msk.eval(&value)?;
    println!("eval(msk, a5)            = {}", block_to_hex(&tag));

    let matching = msk.constrain("1010*1*1")?;
    println!(
        "eval(ck[1010*1*1], a5)   = {}",
        block_to_hex(&matching.eval(&value)?)
    );

    let mismatching = msk.constrain("10100100")?;
    println!(
        "eval(ck[10100100], a5)   = {}",
        block_to_hex(&mismatching.eval(&value)?)
    );

    assert_eq!(matching.eval(&value)?, tag);
    assert_ne!(mismatching.eval(&value)?, tag);
    println!("constrained key agrees on the matching value and nowhere it shouldn't");
    Ok(())
}
