mod bon_appetit;

pub use self::bon_appetit::{BonAppetitExtractor, SOURCE};
