//! # HTML Pages
//!
//! The payment form served at `/` and the payment method list rendered for
//! `/perform_lookup`. Built with `maud`, so every interpolated value is escaped.

use chrono::{DateTime, SecondsFormat, Utc};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use pay_core::{DirectoryLookupResponse, PaymentMethod};

const CSE_FORM_ID: &str = "adyen-encrypted-form";

fn layout(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (title) }
                link rel="stylesheet" href="/static/css/main.css";
            }
            body {
                (body)
            }
        }
    }
}

/// Card inputs carry only `data-encrypted-name`; the CSE script encrypts them
/// into `adyen-encrypted-data` and the raw values are never submitted.
fn encrypted_input(caption: &str, field: &str, size: u8, max_length: Option<u8>) -> Markup {
    html! {
        label {
            (caption) " "
            input type="text" size=(size) maxlength=[max_length] autocomplete="off" data-encrypted-name=(field);
        }
    }
}

fn modification_form(title: &str, action: &str, with_amount: bool) -> Markup {
    html! {
        section {
            h2 { (title) }
            form method="POST" action=(action) {
                @if with_amount {
                    label { "Amount " input type="text" name="amount"; }
                }
                label { "Reference " input type="text" name="reference"; }
                label { "PSP reference " input type="text" name="original-reference"; }
                input type="submit" value=(title);
            }
        }
    }
}

/// Payment form with CSE encryption plus capture/cancel/refund forms.
///
/// `client_url` is the CSE script; `generated_at` becomes the `generationtime`
/// the script folds into the encrypted blob.
pub fn payment_form(client_url: &str, generated_at: DateTime<Utc>) -> Markup {
    let generation_time = generated_at.to_rfc3339_opts(SecondsFormat::Secs, true);

    let body = html! {
        h1 { "Adyen Playground" }

        section {
            h2 { "Authorise" }
            form method="POST" action="/perform_payment" id=(CSE_FORM_ID) {
                label { "Amount " input type="text" name="amount" value="10.00"; }
                label { "Reference " input type="text" name="reference"; }
                label { "Shopper reference " input type="text" name="shopperReference"; }
                label { "Recurring " input type="checkbox" name="is_recurring" value="1"; }

                (encrypted_input("Card number", "number", 20, None))
                (encrypted_input("Holder name", "holderName", 20, None))
                (encrypted_input("Expiry month", "expiryMonth", 2, Some(2)))
                (encrypted_input("Expiry year", "expiryYear", 4, Some(4)))
                (encrypted_input("CVC", "cvc", 4, Some(4)))
                input type="hidden" value=(generation_time) data-encrypted-name="generationtime";

                input type="submit" value="Pay";
            }
        }

        (modification_form("Capture", "/perform_capture", true))
        (modification_form("Cancel", "/perform_cancel", false))
        (modification_form("Refund", "/perform_refund", true))

        section {
            h2 { "Hosted Payment Pages" }
            ul {
                li { a href="/perform_lookup" { "Available payment methods" } }
                li { a href="/perform_hpp" { "Pay with iDEAL" } }
            }
        }

        script type="text/javascript" src=(client_url) {}
        script type="text/javascript" {
            (PreEscaped(format!(
                "var form = document.getElementById('{}');\n\
                 adyen.createEncryptedForm(form, {{ name: 'adyen-encrypted-data' }});",
                CSE_FORM_ID
            )))
        }
    };

    layout("Adyen Playground", body)
}

fn payment_method_item(method: &PaymentMethod) -> Markup {
    let logo = method
        .logos
        .as_ref()
        .and_then(|logos| logos.normal.as_deref().or(logos.small.as_deref()));

    html! {
        li {
            @if let Some(src) = logo {
                img src=(src) alt=(method.name);
                " "
            }
            (method.name) " "
            code { (method.brand_code) }
            @if !method.issuers.is_empty() {
                ul {
                    @for issuer in &method.issuers {
                        li { (issuer.name) " " code { (issuer.issuer_id) } }
                    }
                }
            }
        }
    }
}

/// List of payment methods returned by a directory lookup
pub fn payment_methods(lookup: &DirectoryLookupResponse) -> Markup {
    let body = html! {
        h1 { "Payment methods" }
        @if lookup.payment_methods.is_empty() {
            p { "No payment methods available." }
        } @else {
            ul {
                @for method in &lookup.payment_methods {
                    (payment_method_item(method))
                }
            }
        }
    };

    layout("Payment methods", body)
}
