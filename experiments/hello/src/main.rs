use {
    fzolv_base::{init_logger, init_stdout_logger, log, log_fatal, LogConfig},
    fzolv_math::Vec2f,
};

fn main() {
    let config = match LogConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            init_stdout_logger();
            log_fatal!("{:#}", error);
        }
    };
    init_logger(&config);

    println!("Hi from Fzolv :)");
    println!("===============>");

    let mut point = Vec2f::default();
    point.x = 1.5;
    point.y = 3.5;
    log::debug!("point {:?}, length {}", point, point.length());

    println!("{point:.6}");
}
