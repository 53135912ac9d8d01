use anyhow::{Context, Result, ensure};
use dynamic_array::{DynamicArray, Error, dynamic_array};
use log::{info, warn};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    growth().context("growth walkthrough failed")?;
    editing().context("editing walkthrough failed")?;
    ownership().context("ownership walkthrough failed")?;
    limits().context("limits walkthrough failed")?;

    info!("All walkthroughs passed.");
    Ok(())
}

fn growth() -> Result<()> {
    let mut array = DynamicArray::new();
    for i in 1..=10 {
        array.push_back(i * 10)?;
        info!("pushed {:>3}: len {:>2}, capacity {:>2}", i * 10, array.len(), array.capacity());
    }

    array.shrink_to_fit()?;
    ensure!(array.capacity() == array.len(), "shrink_to_fit left spare slots");
    info!("after shrink_to_fit: {array}");

    while let Some(value) = array.pop_back() {
        info!("popped {value}, len {}", array.len());
    }
    Ok(())
}

fn editing() -> Result<()> {
    let mut array = dynamic_array![1, 2, 3];
    array.insert_range(array.begin() + 1, [10, 20])?;
    info!("insert_range: {array}");

    let pos = array.erase_range(array.begin() + 1, array.begin() + 3);
    info!("erase_range: {array} (cursor now at {})", array[pos]);

    array.emplace(array.end(), 4)?;
    array.insert_n(array.begin(), 2, &0)?;
    info!("emplace + insert_n: {array}");

    let reversed: Vec<String> = array.iter().rev().map(ToString::to_string).collect();
    info!("reversed: {}", reversed.join(" "));
    Ok(())
}

fn ownership() -> Result<()> {
    let mut words = dynamic_array![String::from("Hello"), String::from("World")];
    let copy = words.clone();
    words[1].push('!');
    ensure!(copy != words, "clone shares storage with its source");

    let moved = words.take();
    info!("moved: {moved:?}, source left with {} elements", words.len());

    let mut other = dynamic_array![String::from("swapped")];
    other.swap_with(&mut words);
    info!("after swap: other = {other:?}, words = {words:?}");
    Ok(())
}

fn limits() -> Result<()> {
    let array = dynamic_array![1, 2];
    match array.at(5) {
        Err(err @ Error::OutOfRange { .. }) => warn!("checked access refused: {err}"),
        other => anyhow::bail!("expected OutOfRange, got {other:?}"),
    }

    let mut large: DynamicArray<u8> = DynamicArray::new();
    match large.reserve(large.max_size() + 1) {
        Err(err) => warn!("reserve refused: {err}"),
        Ok(()) => anyhow::bail!("reserve past the limit succeeded"),
    }
    Ok(())
}
