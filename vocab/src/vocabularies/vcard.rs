//! vCard Ontology, the 2014 W3C Interest Group Note (`vcard:`).
//!
//! Terms carried over from the 2006 edition are kept and flagged
//! `owl:deprecated`.

use crate::model::iris::*;
use crate::model::MetaDecl::{self, Iri, Lit};
use crate::model::{TermDecl, VocabularyHeader, VocabularyModule};
use crate::registry::DuplicatePolicy;

/// Returns the `vcard:` vocabulary module.
#[must_use]
pub fn module() -> VocabularyModule {
    VocabularyModule {
        header: VocabularyHeader {
            prefix: "vcard",
            base_uri: "http://www.w3.org/2006/vcard/ns#",
            label: "Ontology for vCard",
            comment: "Ontology for vCard based on RFC6350",
            strict: true,
            duplicates: DuplicatePolicy::KeepLast,
        },
        classes: CLASSES,
        properties: PROPERTIES,
        others: &[],
    }
}

const DEPRECATED: (&str, MetaDecl) = ("owl:deprecated", Lit("true"));

const CLASSES: &[TermDecl] = &[
    TermDecl::class("Kind")
        .label("Kind")
        .comment("The parent class for all objects")
        .meta(&[("equivalentClass", Iri("http://www.w3.org/2006/vcard/ns#VCard"))]),
    TermDecl::class("Individual")
        .label("Individual")
        .comment("An object representing a single person or entity")
        .meta(&[
            ("subClassOf", Iri("http://www.w3.org/2006/vcard/ns#Kind")),
            ("disjointWith", Iri("http://www.w3.org/2006/vcard/ns#Location")),
        ]),
    TermDecl::class("Group")
        .label("Group")
        .comment("Object representing a group of persons or entities. A group object will \
                  usually contain hasMember properties to specify the members of the group.")
        .meta(&[("subClassOf", Iri("http://www.w3.org/2006/vcard/ns#Kind"))]),
    TermDecl::class("Organization")
        .label("Organization")
        .comment("An object representing an organization. An organization is a single \
                  entity, and might represent a business or government, a department or \
                  division within a business or government, a club, an association, or the \
                  like.")
        .meta(&[("subClassOf", Iri("http://www.w3.org/2006/vcard/ns#Kind"))]),
    TermDecl::class("Location")
        .label("Location")
        .comment("An object representing a named geographical place")
        .meta(&[("subClassOf", Iri("http://www.w3.org/2006/vcard/ns#Kind"))]),
    TermDecl::class("Address")
        .label("Address")
        .comment("To specify the components of the delivery address for the object"),
    TermDecl::class("Name")
        .label("Name")
        .comment("To specify the components of the name of the object"),
    TermDecl::class("Email")
        .label("Email")
        .comment("To specify the electronic mail address for communication with the object.")
        .meta(&[DEPRECATED]),
    TermDecl::class("Tel")
        .label("Tel")
        .comment("This class is deprecated. Use the hasTelephone object property.")
        .meta(&[DEPRECATED]),
    TermDecl::class("Type")
        .label("Type")
        .comment("Used for type codes. The URI of the type code must be used as the value for \
                  Type."),
    TermDecl::class("TelephoneType")
        .label("Phone")
        .comment("Used for telephone type codes.")
        .meta(&[("subClassOf", Iri("http://www.w3.org/2006/vcard/ns#Type"))]),
    TermDecl::class("RelatedType")
        .label("Relation Type")
        .comment("Used for relation type codes.")
        .meta(&[("subClassOf", Iri("http://www.w3.org/2006/vcard/ns#Type"))]),
    TermDecl::class("Gender")
        .label("Gender")
        .comment("Used for gender codes."),
    TermDecl::class("VCard")
        .label("VCard")
        .comment("The vCard class is  equivalent to the new Kind class, which is the parent \
                  for the four explicit types of vCards (Individual, Organization, Location, \
                  Group)")
        .meta(&[DEPRECATED]),
    TermDecl::class("Home")
        .label("home")
        .comment("This implicitly defines a namespace for the home type codes.")
        .meta(&[("subClassOf", Iri("http://www.w3.org/2006/vcard/ns#Type"))]),
    TermDecl::class("Work")
        .label("work")
        .comment("This implicitly defines a namespace for the work type codes.")
        .meta(&[("subClassOf", Iri("http://www.w3.org/2006/vcard/ns#Type"))]),
    TermDecl::class("Cell")
        .label("mobile")
        .comment("Also called mobile telephone.")
        .meta(&[("subClassOf", Iri("http://www.w3.org/2006/vcard/ns#TelephoneType"))]),
    TermDecl::class("Fax")
        .label("fax")
        .comment("A facsimile telephone.")
        .meta(&[("subClassOf", Iri("http://www.w3.org/2006/vcard/ns#TelephoneType"))]),
    TermDecl::class("Voice")
        .label("voice")
        .comment("A voice telephone.")
        .meta(&[("subClassOf", Iri("http://www.w3.org/2006/vcard/ns#TelephoneType"))]),
    TermDecl::class("Label")
        .label("Label")
        .comment("This class is deprecated.")
        .meta(&[DEPRECATED]),
];

const PROPERTIES: &[TermDecl] = &[
    TermDecl::property("fn")
        .label("formatted name")
        .comment("The formatted text corresponding to the name of the object")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("hasName")
        .label("has name")
        .comment("To specify the components of the name of the object")
        .meta(&[("range", Iri("http://www.w3.org/2006/vcard/ns#Name"))]),
    TermDecl::property("family-name")
        .label("family name")
        .comment("The family name associated with the object")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("given-name")
        .label("given name")
        .comment("The given name associated with the object")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("additional-name")
        .label("additional name")
        .comment("The additional name associated with the object")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("honorific-prefix")
        .label("honorific prefix")
        .comment("The honorific prefix of the name associated with the object")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("honorific-suffix")
        .label("honorific suffix")
        .comment("The honorific suffix of the name associated with the object")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("nickname")
        .label("nickname")
        .comment("The nick name associated with the object")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("bday")
        .label("birth date")
        .comment("To specify the birth date of the object")
        .meta(&[("range", Iri(XSD_DATETIME))]),
    TermDecl::property("anniversary")
        .label("anniversary")
        .comment("The date of marriage, or equivalent, of the object")
        .meta(&[("range", Iri(XSD_DATETIME))]),
    TermDecl::property("hasGender")
        .label("has gender")
        .comment("To specify  the sex or gender identity of the object. URIs are recommended \
                  to enable interoperable sex and gender codes to be used."),
    TermDecl::property("hasAddress")
        .label("has address")
        .comment("To specify the components of the delivery address for the object")
        .meta(&[("range", Iri("http://www.w3.org/2006/vcard/ns#Address"))]),
    TermDecl::property("street-address")
        .label("street address")
        .comment("The street address associated with the address of the object")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("locality")
        .label("locality")
        .comment("The locality (e.g. city or town) associated with the address of the object")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("region")
        .label("region")
        .comment("The region (e.g. state or province) associated with the address of the \
                  object")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("postal-code")
        .label("postal code")
        .comment("The postal code associated with the address of the object")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("country-name")
        .label("country name")
        .comment("The country name associated with the address of the object")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("hasTelephone")
        .label("has telephone")
        .comment("To specify the telephone number for telephony communication with the object")
        .meta(&[("equivalentProperty", Iri("http://www.w3.org/2006/vcard/ns#tel"))]),
    TermDecl::property("hasEmail")
        .label("has email")
        .comment("To specify the electronic mail address for communication with the object")
        .meta(&[("equivalentProperty", Iri("http://www.w3.org/2006/vcard/ns#email"))]),
    TermDecl::property("hasURL")
        .label("has url")
        .comment("To specify a uniform resource locator associated with the object")
        .meta(&[("equivalentProperty", Iri("http://www.w3.org/2006/vcard/ns#url"))]),
    TermDecl::property("hasPhoto")
        .label("has photo")
        .comment("To specify an image or photograph information that annotates some aspect of \
                  the object")
        .meta(&[("equivalentProperty", Iri("http://www.w3.org/2006/vcard/ns#photo"))]),
    TermDecl::property("hasLogo")
        .label("has logo")
        .comment("To specify a graphic image of a logo associated with the object ")
        .meta(&[("equivalentProperty", Iri("http://www.w3.org/2006/vcard/ns#logo"))]),
    TermDecl::property("hasMember")
        .label("has member")
        .comment("To include a member in the group this object represents. (This property can \
                  only be used by Group individuals)")
        .meta(&[
            ("domain", Iri("http://www.w3.org/2006/vcard/ns#Group")),
            ("range", Iri("http://www.w3.org/2006/vcard/ns#Kind")),
        ]),
    TermDecl::property("hasRelated")
        .label("has related")
        .comment("To specify a relationship between another entity and the entity represented \
                  by this object"),
    TermDecl::property("hasGeo")
        .label("has geo")
        .comment("To specify information related to the global positioning of the object. May \
                  also be used as a property parameter.")
        .meta(&[("equivalentProperty", Iri("http://www.w3.org/2006/vcard/ns#geo"))]),
    TermDecl::property("organization-name")
        .label("organization name")
        .comment("To specify the organizational name associated with the object")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("organization-unit")
        .label("organizational unit name")
        .comment("To specify the organizational unit name associated with the object")
        .meta(&[
            ("range", Iri(XSD_STRING)),
            ("subPropertyOf", Iri("http://www.w3.org/2006/vcard/ns#organization-name")),
        ]),
    TermDecl::property("title")
        .label("title")
        .comment("To specify the position or job of the object")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("role")
        .label("role")
        .comment("To specify the function or part played in a particular situation by the \
                  object")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("note")
        .label("note")
        .comment("A note associated with the object")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("category")
        .label("category")
        .comment("The category information about the object, also known as tags")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("language")
        .label("language")
        .comment("used to indicate the language associated with the object"),
    TermDecl::property("hasUID")
        .label("has uid")
        .comment("To specify a value that represents a globally unique identifier \
                  corresponding to the object"),
    TermDecl::property("rev")
        .label("revision")
        .comment("To specify revision information about the object")
        .meta(&[("range", Iri(XSD_DATETIME))]),
    TermDecl::property("prodid")
        .label("product id")
        .comment("To specify the identifier for the product that created the object")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("sort-string")
        .label("sort as")
        .comment("To specify the string to be used for national-language-specific sorting. \
                  Used as a property parameter only.")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("tz")
        .label("time zone")
        .comment("To indicate time zone information that is specific to the object. May also \
                  be used as a property parameter.")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("value")
        .label("value")
        .comment("Used to indicate the literal value of a data property that requires property \
                  parameters"),
    TermDecl::property("email")
        .label("email")
        .comment("This object property has been mapped. Use the hasEmail object property.")
        .meta(&[DEPRECATED]),
    TermDecl::property("tel")
        .label("telephone")
        .comment("This object property has been mapped. Use the hasTelephone object property.")
        .meta(&[DEPRECATED]),
    TermDecl::property("url")
        .label("url")
        .comment("This object property has been mapped. Use the hasURL object property.")
        .meta(&[DEPRECATED]),
    TermDecl::property("photo")
        .label("photo")
        .comment("This object property has been mapped. Use the hasPhoto object property.")
        .meta(&[DEPRECATED]),
    TermDecl::property("logo")
        .label("logo")
        .comment("This object property has been mapped. Use the hasLogo object property.")
        .meta(&[DEPRECATED]),
    TermDecl::property("geo")
        .label("geo")
        .comment("This object property has been mapped. Use the hasGeo object property.")
        .meta(&[DEPRECATED]),
    TermDecl::property("agent")
        .label("agent")
        .comment("This object property has been deprecated")
        .meta(&[DEPRECATED]),
    TermDecl::property("adr")
        .label("address")
        .comment("This object property has been mapped")
        .meta(&[
            DEPRECATED,
            ("equivalentProperty", Iri("http://www.w3.org/2006/vcard/ns#hasAddress")),
        ]),
    TermDecl::property("n")
        .label("name")
        .comment("This object property has been mapped")
        .meta(&[
            DEPRECATED,
            ("equivalentProperty", Iri("http://www.w3.org/2006/vcard/ns#hasName")),
        ]),
    TermDecl::property("latitude")
        .label("latitude")
        .comment("This data property has been deprecated. See hasGeo")
        .meta(&[DEPRECATED]),
    TermDecl::property("longitude")
        .label("longitude")
        .comment("This data property has been deprecated. See hasGeo")
        .meta(&[DEPRECATED]),
];
