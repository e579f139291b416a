use super::*;
use crate::web::tests::prelude::*;

const BOUNDARY: &str = "X-STREETSCOUT-BOUNDARY";

fn setup() -> Client {
    rocket_test_setup(vec![("/", routes())])
}

fn multipart_body(parts: &[(&str, Option<&str>, &str)]) -> String {
    let mut body = String::new();
    for (name, file_name, content) in parts {
        body.push_str(&format!("--{BOUNDARY}\r\n"));
        match file_name {
            Some(file_name) => body.push_str(&format!(
                "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                 Content-Type: text/csv\r\n\r\n"
            )),
            None => body.push_str(&format!(
                "Content-Disposition: form-data; name=\"{name}\"\r\n\r\n"
            )),
        }
        body.push_str(content);
        body.push_str("\r\n");
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));
    body
}

fn upload<'c>(client: &'c Client, body: String) -> LocalResponse<'c> {
    let content_type =
        ContentType::new("multipart", "form-data").with_params(("boundary", BOUNDARY));
    client.post("/").header(content_type).body(body).dispatch()
}

fn assert_redirect_with_flash(client: &Client, res: LocalResponse, msg: &str) {
    assert_eq!(res.status(), Status::SeeOther);
    assert_eq!(res.headers().get_one("Location"), Some("/"));
    let page = client.get("/").dispatch().into_string().unwrap();
    assert!(page.contains(msg));
}

#[test]
fn get_index_with_upload_form() {
    let client = setup();
    let res = client.get("/").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let body = res.into_string().unwrap();
    assert!(body.contains("enctype=\"multipart/form-data\""));
    assert!(body.contains("name=\"file\""));
    assert!(!body.contains("api-key-missing"));
}

#[test]
fn get_index_without_api_key() {
    let client = rocket_test_setup_with_cfg(vec![("/", routes())], test_cfg(None));
    let body = client.get("/").dispatch().into_string().unwrap();
    assert!(body.contains("api-key-missing"));
}

#[test]
fn serve_stylesheet() {
    let client = setup();
    let res = client.get("/main.css").dispatch();
    assert_eq!(res.status(), Status::Ok);
    assert_eq!(res.content_type(), Some(ContentType::CSS));
}

#[test]
fn upload_csv_file() {
    let client = setup();
    let csv = format!("id,address\n1,\"{KNOWN_ADDRESS}\"\n2,\n3,\"Nowhere, XX\"\n");
    let res = upload(
        &client,
        multipart_body(&[("file", Some("addresses.csv"), &csv)]),
    );
    assert_eq!(res.status(), Status::Ok);
    let body = res.into_string().unwrap();
    assert!(body.contains("Successfully processed 1 addresses"));
    assert!(body.contains(KNOWN_ADDRESS));
    assert!(body.contains("location=37.4224,-122.0841"));
    assert!(!body.contains("Nowhere"));
}

#[test]
fn upload_csv_file_with_upper_case_extension() {
    let client = setup();
    let csv = format!("address\n\"{KNOWN_ADDRESS}\"\n");
    let res = upload(
        &client,
        multipart_body(&[("file", Some("ADDRESSES.CSV"), &csv)]),
    );
    assert_eq!(res.status(), Status::Ok);
    let body = res.into_string().unwrap();
    assert!(body.contains("Successfully processed 1 addresses"));
}

#[test]
fn upload_csv_file_without_resolvable_addresses() {
    let client = setup();
    let res = upload(
        &client,
        multipart_body(&[("file", Some("addresses.csv"), "address\n\"Nowhere, XX\"\n")]),
    );
    assert_eq!(res.status(), Status::Ok);
    let body = res.into_string().unwrap();
    assert!(body.contains("No valid addresses found in the file"));
    assert!(!body.contains("class=\"properties\""));
}

#[test]
fn upload_csv_file_without_address_column() {
    let client = setup();
    let res = upload(
        &client,
        multipart_body(&[("file", Some("addresses.csv"), "street\nMain Street 1\n")]),
    );
    assert_eq!(res.status(), Status::Ok);
    let body = res.into_string().unwrap();
    assert!(body.contains("flash error"));
    assert!(body.contains("The file has no 'address' column"));
}

#[test]
fn reject_file_with_wrong_extension() {
    let client = setup();
    let res = upload(
        &client,
        multipart_body(&[("file", Some("addresses.txt"), "address\nMain Street 1\n")]),
    );
    assert_redirect_with_flash(&client, res, "Invalid file type. Please upload a CSV file");
}

#[test]
fn reject_form_without_file() {
    let client = setup();
    let res = upload(&client, multipart_body(&[("comment", None, "no file here")]));
    assert_redirect_with_flash(&client, res, "No file selected");
}

#[test]
fn accept_csv_extension_in_any_case() {
    assert!(is_csv_file_name("addresses.csv"));
    assert!(is_csv_file_name("ADDRESSES.CSV"));
    assert!(is_csv_file_name("a.b.Csv"));
    assert!(is_csv_file_name(".csv"));
}

#[test]
fn reject_other_extensions() {
    assert!(!is_csv_file_name("addresses.txt"));
    assert!(!is_csv_file_name("addresses.csv.txt"));
    assert!(!is_csv_file_name("csv"));
    assert!(!is_csv_file_name("tabelle.çsv"));
}
