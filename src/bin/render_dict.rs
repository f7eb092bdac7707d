use dicts::{dict, extend, invert, strict_dict, DictExt, Value};
use tracing::Level;
use tracing_subscriber::{filter::Targets, prelude::*, Registry};

fn install_logger() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(Targets::new().with_target("dicts", Level::DEBUG));
    Registry::default().with(fmt_layer).init();
}

fn main() -> dicts::Result<()> {
    install_logger();

    let machine = dict!(
        operating_system = Value::from("linux"),
        version = Value::from("6.1"),
        cpu = Value::from("x86_64"),
        gpu = Value::Null
    )?
    .with_label("machine");
    println!("{}\n", machine);

    let upgraded = extend(&machine, vec![&dict!(version = Value::from("6.6"))?]).compact();
    println!("{}\n", upgraded);

    println!("{}\n", invert(&upgraded)?);

    let strict = strict_dict(upgraded);
    if let Err(err) = strict.get("gpu") {
        println!("{}", err);
    }
    Ok(())
}
