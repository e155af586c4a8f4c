use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};

#[allow(dead_code)]
#[path = "src/config/overrides.rs"]
mod overrides;

use overrides::FieldOverrides;

const PARAM_VARS: [&str; 6] = [
    "L3G4200D_PARAM_I2C",
    "L3G4200D_PARAM_ADDR",
    "L3G4200D_PARAM_INT1",
    "L3G4200D_PARAM_INT2",
    "L3G4200D_PARAM_MODE",
    "L3G4200D_PARAM_SCALE",
];
const CUSTOM_VAR: &str = "L3G4200D_PARAMS_CUSTOM";

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/config/overrides.rs");
    for var in PARAM_VARS.iter().chain([&CUSTOM_VAR]) {
        println!("cargo:rerun-if-env-changed={var}");
    }

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").context("OUT_DIR not set")?);
    let code = generate_l3g4200d()?;
    fs::write(out_dir.join("l3g4200d_params.rs"), code).context("failed to write l3g4200d_params.rs")?;
    Ok(())
}

/// Reads an override variable; an empty value counts as unset.
fn read_var(name: &str) -> Result<Option<String>> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(anyhow!("{name}: {e}")),
    }
}

fn parse_var<T>(name: &str, parse: impl Fn(&str) -> overrides::Result<T>) -> Result<Option<T>> {
    let Some(value) = read_var(name)? else {
        return Ok(None);
    };
    let parsed = parse(&value).map_err(|e| anyhow!("{name}={value:?}: {e}"))?;
    println!("cargo:warning=Using {name} from environment: {value}");
    Ok(Some(parsed))
}

fn generate_l3g4200d() -> Result<String> {
    let fields = FieldOverrides {
        i2c: parse_var("L3G4200D_PARAM_I2C", overrides::parse_u8)?,
        addr: parse_var("L3G4200D_PARAM_ADDR", overrides::parse_u8)?,
        int1: parse_var("L3G4200D_PARAM_INT1", overrides::parse_pin)?,
        int2: parse_var("L3G4200D_PARAM_INT2", overrides::parse_pin)?,
        mode: parse_var("L3G4200D_PARAM_MODE", overrides::parse_mode)?,
        scale: parse_var("L3G4200D_PARAM_SCALE", overrides::parse_scale)?,
    };

    let custom = read_var(CUSTOM_VAR)?;
    let records = match &custom {
        Some(list) => {
            let records = overrides::records(list)
                .enumerate()
                .map(|(i, r)| r.map_err(|e| anyhow!("{CUSTOM_VAR}: record {i}: {e}")))
                .collect::<Result<Vec<_>>>()?;
            if records.is_empty() {
                bail!("{CUSTOM_VAR}: {}", overrides::OverrideError::NoRecords);
            }
            println!(
                "cargo:warning=Using {CUSTOM_VAR} from environment ({} records, field overrides ignored)",
                records.len()
            );
            records
        }
        None => Vec::new(),
    };

    let mut code = String::new();
    overrides::render(&mut code, &fields, &records).context("failed to render l3g4200d_params.rs")?;
    Ok(code)
}
