use log::info;
use rand::{prelude::random, rngs::StdRng, Rng, SeedableRng};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use structopt::StructOpt;

use std::{process, str::FromStr, time};

use rbfix::RbTree;

/// Command line options.
#[derive(Clone, StructOpt)]
pub struct Opt {
    #[structopt(long = "seed")]
    seed: Option<u64>,

    #[structopt(long = "loads", default_value = "1000000")] // default 1M
    loads: usize,

    /// random, asc or desc.
    #[structopt(long = "order", default_value = "random")]
    order: Order,

    #[structopt(long = "validate")]
    validate: bool,

    /// log every fixup case, noisy.
    #[structopt(long = "verbose")]
    verbose: bool,
}

#[derive(Clone, Copy, Debug)]
enum Order {
    Random,
    Asc,
    Desc,
}

impl FromStr for Order {
    type Err = String;

    fn from_str(s: &str) -> Result<Order, String> {
        match s {
            "random" => Ok(Order::Random),
            "asc" => Ok(Order::Asc),
            "desc" => Ok(Order::Desc),
            _ => Err(format!("invalid order {:?}", s)),
        }
    }
}

fn main() {
    let opts = Opt::from_args();

    let level = match opts.verbose {
        true => LevelFilter::Trace,
        false => LevelFilter::Info,
    };
    TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto).ok();

    let seed = opts.seed.unwrap_or_else(random);
    let mut rng = StdRng::seed_from_u64(seed);
    info!("seed:{} loads:{} order:{:?}", seed, opts.loads, opts.order);

    let mut index: RbTree<u64> = RbTree::new();

    let (start, mut n_dups) = (time::Instant::now(), 0);
    for i in 0..opts.loads {
        let key = match opts.order {
            Order::Random => rng.gen::<u64>(),
            Order::Asc => i as u64,
            Order::Desc => (opts.loads - i) as u64,
        };
        if index.insert(key).is_err() {
            n_dups += 1;
        }
    }
    println!(
        "loaded {} items in {:?}, {} duplicates",
        index.len(),
        start.elapsed(),
        n_dups
    );

    let start = time::Instant::now();
    let n = index.iter().count();
    println!("iterated {} items in {:?}", n, start.elapsed());

    match opts.validate {
        true => match index.validate() {
            Ok(stats) => println!("validated {:?}", stats),
            Err(err) => {
                eprintln!("{}", err);
                process::exit(1);
            }
        },
        false => println!("height {}", index.height()),
    }
}
