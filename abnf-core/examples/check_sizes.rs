//! Check sizes of node types and the literal table.

use abnf_core::{Alpha, Char, CharacterLiteral, Crlf, HexDig, Lwsp, LwspItem, Node, Wsp, LITERALS};
use std::mem::{align_of, size_of, size_of_val};

fn main() {
    println!("=== Type Sizes ===");
    println!("CharacterLiteral: {} bytes", size_of::<CharacterLiteral>());
    println!("Alpha: {} bytes", size_of::<Alpha>());
    println!("Char: {} bytes", size_of::<Char>());
    println!("HexDig: {} bytes", size_of::<HexDig>());
    println!("Wsp: {} bytes", size_of::<Wsp>());
    println!("Crlf: {} bytes", size_of::<Crlf>());
    println!("LwspItem: {} bytes", size_of::<LwspItem>());
    println!("Lwsp: {} bytes", size_of::<Lwsp>());
    println!("Node: {} bytes (align {})", size_of::<Node>(), align_of::<Node>());
    println!();

    println!("=== Niche Use ===");
    let opt_size = size_of::<Option<HexDig>>();
    let inner_size = size_of::<HexDig>();
    if opt_size == inner_size {
        println!("Option<HexDig> uses niche optimization (no extra space)");
    } else {
        println!("Option<HexDig> needs {} extra bytes for discriminant", opt_size - inner_size);
    }

    println!();
    println!("=== Literal Table ===");
    println!("LITERALS: {} entries, {} bytes", LITERALS.len(), size_of_val(&LITERALS));
}
