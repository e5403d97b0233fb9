//! Share a receipt as a link and open it again

use receipt_token_core::{receipt_from_url, share_url, ReceiptData};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Receipt Token Share Link Example\n");

    let receipt = ReceiptData {
        recipient_name: "山田 太郎 様".to_string(),
        ..ReceiptData::sample()
    };

    let link = share_url("https://receipts.example.com/", &receipt)?;
    println!("Link ({} chars):\n{}\n", link.as_str().len(), link);

    let opened = receipt_from_url(link.as_str())?;
    let display = opened.display();

    println!("{} / {}", opened.company_name, opened.parking_lot_name);
    println!("Fee:      {}", display.parking_fee);
    println!("Discount: {}", display.discount);
    println!("Total:    {}", display.total);
    println!("Date:     {}", display.receipt_date);

    assert_eq!(opened, receipt);
    Ok(())
}
