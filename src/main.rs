use anyhow::Result;
use strainpath::settings::{self};
use strainpath::{dataset, input, output};

fn main() -> Result<()> {
    let settings = settings::load_config()?;

    let sequence = if let Some(name) = &settings.dataset {
        dataset::builtin(name)?
    } else {
        let (reference, deformed) = match &settings.coords {
            Some(coords) => input::configurations_from_coords(coords)?,
            None => input::prompt_for_coords()?,
        };
        input::pair_sequence(reference.rescaled(settings.scale), deformed)?
    };

    let analysis = sequence.analyze()?;
    print!("{}", output::writeup(&analysis, settings.digits));

    Ok(())
}
