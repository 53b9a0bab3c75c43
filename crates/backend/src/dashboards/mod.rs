pub mod d100_workshop_summary;
