use super::cli::{
    Cli, Command, ContamOp, ConversionType, CooperJacobOp, PumpingMethod, SlugMethod, TheisOp,
};
use super::error::CliError;
use hydrogeo::{
    bouwer_rice_k, convert_conductivity, convert_flow_rate, convert_length,
    cooper_jacob_storativity, cooper_jacob_transmissivity, darcy_flow, hvorslev_k,
    hydraulic_gradient, mg_per_l_to_mol_per_l, mg_per_l_to_ug_per_l, mol_per_l_to_mg_per_l,
    theis_drawdown, ug_per_l_to_mg_per_l,
};

pub fn run(args: Cli) -> Result<(), CliError> {
    match args.command {
        Command::Convert {
            conversion_type,
            args,
        } => {
            let result = match conversion_type {
                ConversionType::Length => {
                    convert_length(args.value, &args.from_unit, &args.to_unit)?
                }
                ConversionType::Flow => {
                    convert_flow_rate(args.value, &args.from_unit, &args.to_unit)?
                }
                ConversionType::Conductivity => {
                    convert_conductivity(args.value, &args.from_unit, &args.to_unit)?
                }
            };
            println!("{}", result);
        }

        Command::Darcy(args) => {
            println!("{}", darcy_flow(args.k, args.i, args.a));
        }

        Command::Gradient(args) => {
            println!("{}", hydraulic_gradient(args.dh, args.dl)?);
        }

        Command::Contam { op, args } => {
            let result = match op {
                ContamOp::Mg2ug => mg_per_l_to_ug_per_l(args.value),
                ContamOp::Ug2mg => ug_per_l_to_mg_per_l(args.value),
                ContamOp::Mol2mg => {
                    let mw = args
                        .mw
                        .ok_or(CliError::Usage("--mw (molecular weight) required for mol2mg"))?;
                    mol_per_l_to_mg_per_l(args.value, mw)
                }
                ContamOp::Mg2mol => {
                    let mw = args
                        .mw
                        .ok_or(CliError::Usage("--mw (molecular weight) required for mg2mol"))?;
                    mg_per_l_to_mol_per_l(args.value, mw)?
                }
            };
            println!("{}", result);
        }

        Command::Pumping { method } => match method {
            PumpingMethod::CooperJacob { op } => match op {
                CooperJacobOp::Transmissivity(args) => {
                    println!("{}", cooper_jacob_transmissivity(args.q, args.ds)?);
                }
                CooperJacobOp::Storativity(args) => {
                    println!("{}", cooper_jacob_storativity(args.t, args.t0, args.r)?);
                }
            },
            PumpingMethod::Theis { op } => match op {
                TheisOp::Drawdown(args) => {
                    let result = theis_drawdown(args.q, args.t, args.s, args.r, args.time)?;
                    println!("u={}", result.u);
                    println!("{}", result.drawdown);
                }
            },
        },

        Command::Slug { method } => match method {
            SlugMethod::Hvorslev(args) => {
                let k = hvorslev_k(args.r, args.l, args.t37)?;
                println!("Hvorslev method");
                println!("r = {}, L = {}, t37 = {}", args.r, args.l, args.t37);
                println!("K = {}", k);
            }
            SlugMethod::BouwerRice(args) => {
                let k = bouwer_rice_k(args.rw, args.re, args.l, args.t37)?;
                println!("Bouwer-Rice method");
                println!(
                    "rw = {}, re = {}, L = {}, t37 = {}",
                    args.rw, args.re, args.l, args.t37
                );
                println!("K = {}", k);
            }
        },
    }

    Ok(())
}
