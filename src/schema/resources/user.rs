//! The `user` resource: a directory user account.

use super::{
    ResourceModel, custom_type_attribute, etag_attribute, primary_attribute, type_attribute,
};
use crate::error::SchemaResult;
use crate::schema::types::{AttributeDefinition, ObjectDefinition, ResourceSchema};
use crate::validators::Validator;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const TYPE_NAME: &str = "user";

/// Hash functions accepted for a pre-hashed password.
pub const HASH_FUNCTIONS: [&str; 3] = ["MD5", "SHA-1", "crypt"];

pub fn user_schema() -> SchemaResult<ResourceSchema> {
    let name = ObjectDefinition::new(vec![
        AttributeDefinition::string("family_name")
            .required()
            .describe("The user's last name.")
            .with_validator(Validator::string_length(1, 60)?),
        AttributeDefinition::string("given_name")
            .required()
            .describe("The user's first name.")
            .with_validator(Validator::string_length(1, 60)?),
        AttributeDefinition::string("full_name")
            .computed()
            .describe("The user's full name formed by concatenating the first and last name values."),
    ]);

    let emails = ObjectDefinition::new(vec![
        AttributeDefinition::string("address").describe("The user's email address."),
        custom_type_attribute(),
        primary_attribute(),
        type_attribute(&["custom", "home", "other", "work"])?,
    ]);

    let external_ids = ObjectDefinition::new(vec![
        custom_type_attribute(),
        type_attribute(&["account", "custom", "customer", "login_id", "network", "organization"])?,
        AttributeDefinition::string("value")
            .required()
            .describe("The value of the ID."),
    ]);

    let relations = ObjectDefinition::new(vec![
        custom_type_attribute(),
        type_attribute(&[
            "admin_assistant",
            "assistant",
            "brother",
            "child",
            "custom",
            "domestic_partner",
            "dotted_line_manager",
            "exec_assistant",
            "father",
            "friend",
            "manager",
            "mother",
            "parent",
            "partner",
            "referred_by",
            "relative",
            "sister",
            "spouse",
        ])?,
        AttributeDefinition::string("value")
            .required()
            .describe("The name of the person the user is related to."),
    ]);

    let addresses = ObjectDefinition::new(vec![
        AttributeDefinition::string("country").describe("Country."),
        AttributeDefinition::string("country_code").describe("The country code. Uses the ISO 3166-1 standard."),
        custom_type_attribute(),
        AttributeDefinition::string("extended_address")
            .describe("For extended addresses, such as an address that includes a sub-region."),
        AttributeDefinition::string("formatted").describe("A full and unstructured postal address."),
        AttributeDefinition::string("locality").describe("The town or city of the address."),
        AttributeDefinition::string("po_box").describe("The post office box, if present."),
        AttributeDefinition::string("postal_code").describe("The ZIP or postal code, if applicable."),
        primary_attribute(),
        AttributeDefinition::string("region").describe("The abbreviated province or state."),
        AttributeDefinition::bool("source_is_structured")
            .describe("Indicates if the user-supplied address was formatted."),
        AttributeDefinition::string("street_address").describe("The street address."),
        type_attribute(&["custom", "home", "other", "work"])?,
    ]);

    let organizations = ObjectDefinition::new(vec![
        AttributeDefinition::string("cost_center")
            .describe("The cost center of the user's organization."),
        custom_type_attribute(),
        AttributeDefinition::string("department")
            .describe("Specifies the department within the organization."),
        AttributeDefinition::string("description").describe("The description of the organization."),
        AttributeDefinition::string("domain").describe("The domain the organization belongs to."),
        AttributeDefinition::int64("full_time_equivalent")
            .describe("The full-time equivalent millipercent within the organization (100000 = 100%)."),
        AttributeDefinition::string("location").describe("The physical location of the organization."),
        AttributeDefinition::string("name").describe("The name of the organization."),
        primary_attribute(),
        AttributeDefinition::string("symbol")
            .describe("Text string symbol of the organization."),
        AttributeDefinition::string("title").describe("The user's title within the organization."),
        type_attribute(&["domain_only", "school", "unknown", "work"])?,
    ]);

    let phones = ObjectDefinition::new(vec![
        custom_type_attribute(),
        primary_attribute(),
        type_attribute(&[
            "assistant",
            "callback",
            "car",
            "company_main",
            "custom",
            "grand_central",
            "home",
            "home_fax",
            "isdn",
            "main",
            "mobile",
            "other",
            "other_fax",
            "pager",
            "radio",
            "telex",
            "tty_tdd",
            "work",
            "work_fax",
            "work_mobile",
            "work_pager",
        ])?,
        AttributeDefinition::string("value")
            .required()
            .describe("A human-readable phone number."),
    ]);

    let languages = ObjectDefinition::new(vec![
        AttributeDefinition::string("custom_language")
            .describe("Other language. Set when the language code is not an ISO 639 code."),
        AttributeDefinition::string("language_code")
            .describe("ISO 639 string representation of a language."),
        AttributeDefinition::string("preference")
            .describe("Whether the language is preferred by the user.")
            .with_validator(Validator::one_of(["preferred", "not_preferred"])?),
    ]);

    let posix_accounts = ObjectDefinition::new(vec![
        AttributeDefinition::string("account_id").describe("A POSIX account field identifier."),
        AttributeDefinition::string("gecos").describe("The GECOS (user information) for this account."),
        AttributeDefinition::int64("gid").describe("The default group ID."),
        AttributeDefinition::string("home_directory").describe("The path to the home directory for this account."),
        AttributeDefinition::string("operating_system_type")
            .describe("The operating system type for this account.")
            .with_validator(Validator::one_of(["linux", "unspecified", "windows"])?),
        primary_attribute(),
        AttributeDefinition::string("shell").describe("The path to the login shell for this account."),
        AttributeDefinition::string("system_id")
            .describe("System identifier for which account Username or Uid apply to."),
        AttributeDefinition::int64("uid").describe("The POSIX compliant user ID."),
        AttributeDefinition::string("username").describe("The username of the account."),
    ]);

    let ssh_public_keys = ObjectDefinition::new(vec![
        AttributeDefinition::int64("expiration_time_usec")
            .describe("An expiration time in microseconds since epoch."),
        AttributeDefinition::string("fingerprint")
            .computed()
            .describe("A SHA-256 fingerprint of the SSH public key."),
        AttributeDefinition::string("key")
            .required()
            .describe("An SSH public key."),
    ]);

    let websites = ObjectDefinition::new(vec![
        custom_type_attribute(),
        primary_attribute(),
        type_attribute(&[
            "app_install_page",
            "blog",
            "custom",
            "ftp",
            "home",
            "home_page",
            "other",
            "profile",
            "reservations",
            "resume",
            "work",
        ])?,
        AttributeDefinition::string("value")
            .required()
            .describe("The URL of the website."),
    ]);

    let locations = ObjectDefinition::new(vec![
        AttributeDefinition::string("area").describe("Textual location."),
        AttributeDefinition::string("building_id").describe("Building identifier."),
        custom_type_attribute(),
        AttributeDefinition::string("desk_code").describe("Most specific textual code of individual desk location."),
        AttributeDefinition::string("floor_name").describe("Floor name/number."),
        AttributeDefinition::string("floor_section").describe("Floor section."),
        type_attribute(&["custom", "default", "desk"])?,
    ]);

    let keywords = ObjectDefinition::new(vec![
        custom_type_attribute(),
        type_attribute(&["custom", "mission", "occupation", "outlook"])?,
        AttributeDefinition::string("value")
            .required()
            .describe("Keyword."),
    ]);

    let ims = ObjectDefinition::new(vec![
        AttributeDefinition::string("custom_protocol")
            .describe("If the protocol value is custom_protocol, the custom protocol's string."),
        custom_type_attribute(),
        AttributeDefinition::string("im").describe("The user's IM network ID."),
        primary_attribute(),
        AttributeDefinition::string("protocol")
            .required()
            .describe("An IM protocol identifies the IM network.")
            .with_validator(Validator::one_of([
                "custom_protocol",
                "aim",
                "gtalk",
                "icq",
                "jabber",
                "msn",
                "net_meeting",
                "qq",
                "skype",
                "yahoo",
            ])?),
        type_attribute(&["custom", "home", "other", "work"])?,
    ]);

    let custom_schemas = ObjectDefinition::new(vec![
        AttributeDefinition::string("schema_name")
            .required()
            .describe("The name of the schema."),
        AttributeDefinition::string_map("schema_values")
            .required()
            .describe("JSON encoded map of the schema's fields to their values."),
    ]);

    let root = ObjectDefinition::new(vec![
        AttributeDefinition::string("id")
            .computed()
            .describe("The unique ID for the user."),
        AttributeDefinition::string("primary_email")
            .required()
            .describe("The user's primary email address."),
        AttributeDefinition::string("password")
            .sensitive()
            .describe("Stores the password for the user account.")
            .with_validator(Validator::string_length(8, 100)?),
        AttributeDefinition::string("hash_function")
            .describe("Stores the hash format of the password property.")
            .with_validator(Validator::one_of(HASH_FUNCTIONS)?),
        AttributeDefinition::bool("is_admin")
            .optional_computed()
            .describe("Indicates a user with super admin privileges."),
        AttributeDefinition::bool("is_delegated_admin")
            .computed()
            .describe("Indicates if the user is a delegated administrator."),
        AttributeDefinition::bool("agreed_to_terms")
            .computed()
            .describe("Whether the user has agreed to the terms of service."),
        AttributeDefinition::bool("suspended")
            .optional_computed()
            .describe("Indicates if the user is suspended."),
        AttributeDefinition::bool("change_password_at_next_login")
            .describe("Indicates if the user is forced to change their password at next login."),
        AttributeDefinition::bool("ip_allowlist")
            .describe("If true, the user's IP address is added to the allow list."),
        AttributeDefinition::object("name", name)
            .required()
            .describe("Holds the given and family names of the user."),
        AttributeDefinition::object_list("emails", emails).describe("The user's email addresses."),
        AttributeDefinition::object_list("external_ids", external_ids)
            .describe("A list of external IDs for the user."),
        AttributeDefinition::object_list("relations", relations)
            .describe("A list of the user's relationships to other users."),
        AttributeDefinition::string_list("aliases")
            .describe("The user's alias email addresses."),
        AttributeDefinition::bool("is_mailbox_setup")
            .computed()
            .describe("Indicates if the user's mailbox is created."),
        AttributeDefinition::string("customer_id")
            .computed()
            .describe("The customer ID to retrieve all account users."),
        AttributeDefinition::object_list("addresses", addresses)
            .describe("A list of the user's addresses."),
        AttributeDefinition::object_list("organizations", organizations)
            .describe("A list of organizations the user belongs to."),
        AttributeDefinition::object_list("phones", phones)
            .describe("A list of the user's phone numbers."),
        AttributeDefinition::object_list("languages", languages)
            .describe("A list of the user's languages."),
        AttributeDefinition::object_list("posix_accounts", posix_accounts)
            .describe("A list of POSIX account information for the user."),
        AttributeDefinition::object_list("ssh_public_keys", ssh_public_keys)
            .describe("A list of SSH public keys."),
        AttributeDefinition::object_list("websites", websites)
            .describe("A list of the user's websites."),
        AttributeDefinition::object_list("locations", locations)
            .describe("The user's locations."),
        AttributeDefinition::object_list("keywords", keywords)
            .describe("A list of the user's keywords."),
        AttributeDefinition::object_list("ims", ims)
            .describe("The user's Instant Messenger (IM) accounts."),
        AttributeDefinition::object_list("custom_schemas", custom_schemas)
            .describe("Custom fields of the user."),
        AttributeDefinition::string("recovery_email")
            .describe("Recovery email of the user."),
        AttributeDefinition::string("recovery_phone")
            .describe("Recovery phone of the user, in E.164 format."),
        AttributeDefinition::bool("include_in_global_address_list")
            .optional_computed()
            .describe("Indicates if the user's profile is visible in the global address list."),
        AttributeDefinition::string("thumbnail_photo_url")
            .computed()
            .describe("Photo URL of the user."),
        AttributeDefinition::string("org_unit_path")
            .optional_computed()
            .describe("The full path of the parent organization associated with the user."),
        AttributeDefinition::string("last_login_time")
            .computed()
            .describe("The last time the user logged into the user's account."),
        AttributeDefinition::string("creation_time")
            .computed()
            .describe("The time the user's account was created."),
        AttributeDefinition::string("deletion_time")
            .computed()
            .describe("The time the user's account was deleted."),
        AttributeDefinition::bool("archived")
            .describe("Indicates if the user is archived."),
        AttributeDefinition::bool("is_enrolled_in_2_step_verification")
            .computed()
            .describe("Is enrolled in 2-step verification."),
        AttributeDefinition::bool("is_enforced_in_2_step_verification")
            .computed()
            .describe("Is 2-step verification enforced."),
        AttributeDefinition::string_list("non_editable_aliases")
            .computed()
            .describe("The list of the user's non-editable alias email addresses."),
        etag_attribute(),
    ]);

    Ok(ResourceSchema::new(TYPE_NAME, "Directory user account.", root).with_version(1))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserModel {
    pub id: Option<String>,
    pub primary_email: String,
    pub password: Option<String>,
    pub hash_function: Option<String>,
    pub is_admin: Option<bool>,
    pub is_delegated_admin: Option<bool>,
    pub agreed_to_terms: Option<bool>,
    pub suspended: Option<bool>,
    pub change_password_at_next_login: Option<bool>,
    pub ip_allowlist: Option<bool>,
    pub name: UserName,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<UserEmail>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub external_ids: Vec<UserTypedValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relations: Vec<UserTypedValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    pub is_mailbox_setup: Option<bool>,
    pub customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<UserAddress>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub organizations: Vec<UserOrganization>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<UserContact>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<UserLanguage>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub posix_accounts: Vec<UserPosixAccount>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ssh_public_keys: Vec<UserSshPublicKey>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub websites: Vec<UserContact>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<UserLocation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<UserTypedValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ims: Vec<UserIm>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_schemas: Vec<UserCustomSchema>,
    pub recovery_email: Option<String>,
    pub recovery_phone: Option<String>,
    pub include_in_global_address_list: Option<bool>,
    pub thumbnail_photo_url: Option<String>,
    pub org_unit_path: Option<String>,
    pub last_login_time: Option<DateTime<Utc>>,
    pub creation_time: Option<DateTime<Utc>>,
    pub deletion_time: Option<DateTime<Utc>>,
    pub archived: Option<bool>,
    pub is_enrolled_in_2_step_verification: Option<bool>,
    pub is_enforced_in_2_step_verification: Option<bool>,
    pub non_editable_aliases: Option<Vec<String>>,
    pub etag: Option<String>,
}

impl ResourceModel for UserModel {
    const TYPE_NAME: &'static str = TYPE_NAME;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserName {
    pub family_name: String,
    pub given_name: String,
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserEmail {
    pub address: Option<String>,
    pub custom_type: Option<String>,
    pub primary: Option<bool>,
    #[serde(rename = "type")]
    pub entry_type: String,
}

/// Entry shape shared by external IDs, relations and keywords.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserTypedValue {
    pub custom_type: Option<String>,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub value: String,
}

/// Entry shape shared by phones and websites.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserContact {
    pub custom_type: Option<String>,
    pub primary: Option<bool>,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserAddress {
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub custom_type: Option<String>,
    pub extended_address: Option<String>,
    pub formatted: Option<String>,
    pub locality: Option<String>,
    pub po_box: Option<String>,
    pub postal_code: Option<String>,
    pub primary: Option<bool>,
    pub region: Option<String>,
    pub source_is_structured: Option<bool>,
    pub street_address: Option<String>,
    #[serde(rename = "type")]
    pub entry_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserOrganization {
    pub cost_center: Option<String>,
    pub custom_type: Option<String>,
    pub department: Option<String>,
    pub description: Option<String>,
    pub domain: Option<String>,
    pub full_time_equivalent: Option<i64>,
    pub location: Option<String>,
    pub name: Option<String>,
    pub primary: Option<bool>,
    pub symbol: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub entry_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserLanguage {
    pub custom_language: Option<String>,
    pub language_code: Option<String>,
    pub preference: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPosixAccount {
    pub account_id: Option<String>,
    pub gecos: Option<String>,
    pub gid: Option<i64>,
    pub home_directory: Option<String>,
    pub operating_system_type: Option<String>,
    pub primary: Option<bool>,
    pub shell: Option<String>,
    pub system_id: Option<String>,
    pub uid: Option<i64>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSshPublicKey {
    pub expiration_time_usec: Option<i64>,
    pub fingerprint: Option<String>,
    pub key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserLocation {
    pub area: Option<String>,
    pub building_id: Option<String>,
    pub custom_type: Option<String>,
    pub desk_code: Option<String>,
    pub floor_name: Option<String>,
    pub floor_section: Option<String>,
    #[serde(rename = "type")]
    pub entry_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserIm {
    pub custom_protocol: Option<String>,
    pub custom_type: Option<String>,
    pub im: Option<String>,
    pub primary: Option<bool>,
    pub protocol: String,
    #[serde(rename = "type")]
    pub entry_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserCustomSchema {
    pub schema_name: String,
    pub schema_values: BTreeMap<String, String>,
}
