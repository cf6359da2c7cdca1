use anyhow::Result;
use ndarray::array;

use matlab_compat::logging::init_logger;
use matlab_compat::{
    colon, cumsum, find, mean, sort, sum, DispatchConfig, Dispatcher, RankPolicy, SortOrder,
};

fn main() -> Result<()> {
    init_logger("info,matlab_compat=trace");

    let column = array![[1.0], [2.0], [3.0]];
    let matrix = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];

    println!("sum(column)  = {:?}", sum(&column)?);
    println!("sum(matrix)  = {:?}", sum(&matrix)?);
    println!("mean(matrix) = {:?}", mean(&matrix)?);
    println!("cumsum(matrix) = {:?}", cumsum(&matrix)?);
    println!("sort(matrix, descend) = {:?}", sort(&matrix, SortOrder::Descend)?);
    println!("find(matrix > 2) = {}", find(&matrix.mapv(|x| x > 2.0)));
    println!("1:5 = {}", colon(1.0, 5.0)?);

    let cube = ndarray::Array::from_shape_vec((1, 2, 3), (1..=6).map(f64::from).collect())?;
    let lenient = Dispatcher::new(DispatchConfig::new(RankPolicy::FirstNonSingleton));
    println!("sum(cube)    = {:?}", lenient.sum(&cube)?);

    Ok(())
}
