use std::{env, error::Error, process};

use clap::{crate_version, App, AppSettings, Arg, ArgMatches};
use env_logger::Builder;
use graticule::{parse_coordinate, AxisKind, AxisLines, Bounds, Graticule, GraticuleOptions};
use log::{debug, error};

fn init_logger(args: &ArgMatches<'_>) {
    let mut builder = Builder::new();

    let rust_log = match (args.value_of("loglevel"), env::var("RUST_LOG")) {
        (Some(level), _) => level.to_string(),
        (None, Ok(from_env)) => from_env,
        (None, Err(_)) => "info".to_string(),
    };
    builder.parse_filters(&rust_log);
    builder.init();
}

fn coordinate(args: &ArgMatches<'_>, name: &str, axis: AxisKind) -> Result<f64, Box<dyn Error>> {
    let value = args.value_of(name).unwrap_or_default();
    parse_coordinate(value, axis).map_err(|err| format!("--{name}: {err}").into())
}

fn divisions(args: &ArgMatches<'_>, name: &str, default: u32) -> Result<u32, Box<dyn Error>> {
    args.value_of(name).map_or(Ok(default), |value| {
        value
            .parse()
            .map_err(|err| format!("--{name}: {err}").into())
    })
}

fn print_axis(lines: &AxisLines) {
    for line in &lines.lines {
        println!("{}\t{}\t{}", lines.axis, line.text, line.label);
    }
}

fn viewport_from_args(
    args: &ArgMatches<'_>,
) -> Result<(Bounds, GraticuleOptions), Box<dyn Error>> {
    let bounds = Bounds::new(
        coordinate(args, "west", AxisKind::Longitude)?,
        coordinate(args, "east", AxisKind::Longitude)?,
        coordinate(args, "south", AxisKind::Latitude)?,
        coordinate(args, "north", AxisKind::Latitude)?,
    );

    let defaults = GraticuleOptions::default();
    let options = GraticuleOptions {
        lng_divisions: divisions(args, "lng-divisions", defaults.lng_divisions)?,
        lat_divisions: divisions(args, "lat-divisions", defaults.lat_divisions)?,
    };

    Ok((bounds, options))
}

fn run(args: &ArgMatches<'_>) -> Result<(), Box<dyn Error>> {
    let (bounds, options) = viewport_from_args(args)?;
    debug!("Computing graticule for {:?} with {:?}", bounds, options);

    let grid = Graticule::compute(&bounds, &options)?;
    print_axis(&grid.longitudes);
    print_axis(&grid.latitudes);
    Ok(())
}

fn app() -> App<'static, 'static> {
    let bound = |name: &'static str, help: &'static str| {
        Arg::with_name(name)
            .long(name)
            .value_name("DEGREES")
            .help(help)
            .takes_value(true)
            .allow_hyphen_values(true)
            .required(true)
    };

    App::new("graticule")
        .version(crate_version!())
        .about("Prints the meridians and parallels visible in the map viewport")
        .setting(AppSettings::AllowNegativeNumbers)
        .arg(bound("west", "Western edge of the viewport (e.g. -10.5 or \"10°30′ W\")"))
        .arg(bound("east", "Eastern edge of the viewport"))
        .arg(bound("south", "Southern edge of the viewport"))
        .arg(bound("north", "Northern edge of the viewport"))
        .arg(
            Arg::with_name("lng-divisions")
                .long("lng-divisions")
                .value_name("N")
                .help("Approximate number of divisions between the west and the east [default: 3]")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("lat-divisions")
                .long("lat-divisions")
                .value_name("N")
                .help("Approximate number of divisions between the south and the north [default: 2]")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("loglevel")
                .long("loglevel")
                .value_name("LEVEL")
                .help("Log level (error, warn, info, debug, trace)")
                .takes_value(true),
        )
}

fn main() {
    let matches = app().get_matches();

    init_logger(&matches);

    if let Err(err) = run(&matches) {
        error!("{err}");
        process::exit(1);
    }
}
