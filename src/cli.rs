// src/cli.rs
use std::{
    env, fs,
    io::{self, Read, Write},
    path::PathBuf,
};

use crate::annotate;
use crate::core::html::HtmlDocument;
use crate::params::Params;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let params = parse_cli()?;

    let html = match &params.input {
        Some(p) => fs::read_to_string(p).map_err(|e| {
            loge!("read {}: {}", p.display(), e);
            format!("{}: {}", p.display(), e)
        })?,
        None => {
            let mut buf = s!();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    logf!("read {} bytes", html.len());

    let mut doc = HtmlDocument::parse(&html);
    let stats = annotate::annotate_page(&mut doc)?;
    let out_html = doc.to_html();

    match out_target(&params) {
        Some(path) => fs::write(&path, &out_html)?,
        None => io::stdout().write_all(out_html.as_bytes())?,
    }

    logf!("done: {} labels, {} narrative blocks", stats.labels, stats.narratives);
    eprintln!(
        "Annotated {} temperature label(s), {} forecast block(s)",
        stats.labels, stats.narratives
    );
    Ok(())
}

fn out_target(params: &Params) -> Option<PathBuf> {
    if params.in_place {
        return params.input.clone();
    }
    params.out.clone()
}

fn parse_cli() -> Result<Params, Box<dyn std::error::Error>> {
    let mut params = Params::new();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-o" | "--out" => {
                params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?));
            }
            "--in-place" => params.in_place = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            other if other.starts_with('-') => {
                return Err(format!("Unknown arg: {}", other).into());
            }
            _ => {
                if params.input.is_some() {
                    return Err(format!("Unexpected extra input: {}", a).into());
                }
                params.input = Some(PathBuf::from(a));
            }
        }
    }

    if params.in_place && params.input.is_none() {
        return Err("--in-place requires an input file".into());
    }
    if params.in_place && params.out.is_some() {
        return Err("--in-place and --out are mutually exclusive".into());
    }

    Ok(params)
}
