use solana_sdk::pubkey::Pubkey;

// OpenBook V2 program on mainnet
pub const OPENBOOK_V2_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("opnb2LAfJYbRMAHHvqjCwQxanZn7ReEHp1k81EohpZb");

pub const SWAP_INSTRUCTION: &str = "swap";

// Account names of the swap instruction, in order
pub const SWAP_ACCOUNT_NAMES: [&str; 6] = [
    "market",
    "sourceTokenAccount",
    "destinationTokenAccount",
    "user",
    "systemProgram",
    "tokenProgram",
];
