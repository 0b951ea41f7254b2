use huffman_sim::huffman::HuffmanTree;
use huffman_sim::{compress, decode, Error};

fn main() -> Result<(), Error> {
    let sequence_to_encode = vec![3u8, 3, 3, 2, 1, 4, 5, 3, 3, 3, 0, 2, 3];

    let compression = compress(&sequence_to_encode)?;
    println!("symbol frequencies");
    for (symbol, frequency) in compression.frequencies() {
        println!("  {}: {}", symbol, frequency);
    }
    println!("codes");
    for (symbol, code) in compression.code_table() {
        println!("  {}: {}", symbol, code);
    }

    println!("sequence to encode\n{:?}", sequence_to_encode);
    println!(
        "encoded sequence ({} of {} bits)\n{}",
        compression.encoded_bit_length(),
        compression.original_bit_length(),
        compression.encoded_bits()
    );

    let decoded = decode(compression.encoded_bits(), compression.tree())?;
    println!("decoded sequence\n{:?}", decoded);

    // a caller that only kept the code table rebuilds the tree from it
    let rebuilt_tree = HuffmanTree::from_code_table(compression.code_table())?;
    let decoded_again = decode(compression.encoded_bits(), &rebuilt_tree)?;
    println!("decoded with rebuilt tree\n{:?}", decoded_again);
    Ok(())
}
