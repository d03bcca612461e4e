//! GoodRelations, the web vocabulary for e-commerce (`gr:`).
//!
//! Offers, business entities, price and quantity specifications, and the
//! product model hierarchy.

use crate::model::iris::*;
use crate::model::MetaDecl::{Iri, Iris};
use crate::model::{TermDecl, VocabularyHeader, VocabularyModule};
use crate::registry::DuplicatePolicy;

/// Returns the `gr:` vocabulary module.
#[must_use]
pub fn module() -> VocabularyModule {
    VocabularyModule {
        header: VocabularyHeader {
            prefix: "gr",
            base_uri: "http://purl.org/goodrelations/v1#",
            label: "The GoodRelations Vocabulary for Semantic Web-based E-Commerce",
            comment: "The GoodRelations ontology provides the vocabulary for annotating \
                      e-commerce offerings (1) to sell, lease, repair, dispose, or maintain \
                      commodity products and (2) to provide commodity services.",
            strict: true,
            duplicates: DuplicatePolicy::KeepLast,
        },
        classes: CLASSES,
        properties: PROPERTIES,
        others: INDIVIDUALS,
    }
}

const CLASSES: &[TermDecl] = &[
    TermDecl::class("BusinessEntity")
        .label("Business entity")
        .comment("An instance of this class represents the legal agent making (or seeking) a \
                  particular offering. This can be a legal body or a person."),
    TermDecl::class("BusinessEntityType")
        .label("Business entity type")
        .comment("A business entity type is a conceptual entity representing the legal form, \
                  the size, the main line of business, the position in the value chain, or \
                  any combination thereof, of a gr:BusinessEntity."),
    TermDecl::class("BusinessFunction")
        .label("Business function")
        .comment("The business function specifies the type of activity or access (i.e., the \
                  bundle of rights) offered by the gr:BusinessEntity on the gr:ProductOrService \
                  through the gr:Offering."),
    TermDecl::class("Brand")
        .label("Brand")
        .comment("This class represents a brand. Brands are the name of a product or a \
                  family of products, often used for marketing purposes."),
    TermDecl::class("DayOfWeek")
        .label("Day of week")
        .comment("The day of the week, used to specify to which day the opening hours of a \
                  gr:OpeningHoursSpecification refer."),
    TermDecl::class("DeliveryChargeSpecification")
        .label("Delivery charge specification")
        .comment("A delivery charge specification is a conceptual entity that specifies the \
                  additional costs asked for the delivery of a given gr:Offering using a \
                  particular gr:DeliveryMethod by the respective gr:BusinessEntity.")
        .meta(&[("subClassOf", Iri("http://purl.org/goodrelations/v1#PriceSpecification"))]),
    TermDecl::class("DeliveryMethod")
        .label("Delivery method")
        .comment("A delivery method is a standardized procedure for transferring the product \
                  or service to the destination of fulfilment chosen by the customer."),
    TermDecl::class("DeliveryModeParcelService")
        .label("Delivery mode parcel service")
        .comment("A private parcel service as the delivery mode available for a certain \
                  offering.")
        .meta(&[("subClassOf", Iri("http://purl.org/goodrelations/v1#DeliveryMethod"))]),
    TermDecl::class("Individual")
        .label("Individual")
        .comment("A gr:Individual is an actual product or service instance, i.e., a single \
                  identifiable object or action that creates some increase in utility (in the \
                  economic sense) for the individual possessing or using this very object \
                  (product) or for the individual in whose favor this very action is being \
                  taken (service).")
        .meta(&[("subClassOf", Iri("http://purl.org/goodrelations/v1#ProductOrService"))]),
    TermDecl::class("License")
        .label("License")
        .comment("A license is the specification of a bundle of rights that determines the \
                  type of activity or access offered by the gr:BusinessEntity on the \
                  gr:ProductOrService through the gr:Offering.")
        .meta(&[("subClassOf", Iri("http://purl.org/goodrelations/v1#BusinessFunction"))]),
    TermDecl::class("Location")
        .label("Location")
        .comment("A location is a point or area of interest from which a particular product \
                  or service is available, e.g. a store, a bus stop, a gas station, or a \
                  ticket booth."),
    TermDecl::class("Offering")
        .label("Offering")
        .comment("An offering represents the public, not necessarily binding, not \
                  necessarily exclusive, announcement by a gr:BusinessEntity to provide (or \
                  seek) a certain gr:BusinessFunction for a certain gr:ProductOrService to a \
                  specified target audience."),
    TermDecl::class("OpeningHoursSpecification")
        .label("Opening hours specification")
        .comment("This is a conceptual entity that holds together all information about the \
                  opening hours on a given gr:DayOfWeek."),
    TermDecl::class("PaymentChargeSpecification")
        .label("Payment charge specification")
        .comment("A payment charge specification is a conceptual entity that specifies \
                  additional costs asked for settling the payment after accepting a given \
                  gr:Offering using a particular gr:PaymentMethod.")
        .meta(&[("subClassOf", Iri("http://purl.org/goodrelations/v1#PriceSpecification"))]),
    TermDecl::class("PaymentMethod")
        .label("Payment method")
        .comment("A payment method is a standardized procedure for transferring the \
                  monetary amount for a purchase."),
    TermDecl::class("PaymentMethodCreditCard")
        .label("Payment method credit card")
        .comment("The subclass of gr:PaymentMethod represents all variants and brands of \
                  credit or debit cards as a standardized procedure for transferring the \
                  monetary amount for a purchase.")
        .meta(&[("subClassOf", Iri("http://purl.org/goodrelations/v1#PaymentMethod"))]),
    TermDecl::class("PriceSpecification")
        .label("Price specification")
        .comment("The superclass of all price specifications.")
        .meta(&[("subClassOf", Iri("http://purl.org/goodrelations/v1#QuantitativeValue"))]),
    TermDecl::class("ProductOrService")
        .label("Product or service")
        .comment("The superclass of all classes describing products or services types, \
                  either by nature or purpose."),
    TermDecl::class("ProductOrServiceModel")
        .label("Product or service model")
        .comment("A gr:ProductOrServiceModel is a conceptual entity that captures the \
                  common characteristics of a set of product or service instances, e.g. a \
                  make and model of a car.")
        .meta(&[("subClassOf", Iri("http://purl.org/goodrelations/v1#ProductOrService"))]),
    TermDecl::class("QualitativeValue")
        .label("Qualitative value")
        .comment("A qualitative value is a predefined value for a product characteristic.")
        .meta(&[("equivalentClass", Iri("http://purl.org/goodrelations/v1#ValueSpecification"))]),
    TermDecl::class("QuantitativeValue")
        .label("Quantitative value")
        .comment("A quantitative value is a numerical interval that represents the range of \
                  a certain gr:quantitativeProductOrServiceProperty in terms of the lower \
                  and upper bounds for a particular gr:ProductOrService."),
    TermDecl::class("QuantitativeValueFloat")
        .label("Quantitative value float")
        .comment("An instance of this class is an actual float value for a quantitative \
                  property of a product.")
        .meta(&[("subClassOf", Iri("http://purl.org/goodrelations/v1#QuantitativeValue"))]),
    TermDecl::class("QuantitativeValueInteger")
        .label("Quantitative value integer")
        .comment("An instance of this class is an actual integer value for a quantitative \
                  property of a product.")
        .meta(&[("subClassOf", Iri("http://purl.org/goodrelations/v1#QuantitativeValue"))]),
    TermDecl::class("SomeItems")
        .label("Some items")
        .comment("A gr:SomeItems represents an inventory of instances of products or \
                  services of a particular type.")
        .meta(&[("subClassOf", Iri("http://purl.org/goodrelations/v1#ProductOrService"))]),
    TermDecl::class("TypeAndQuantityNode")
        .label("Type and quantity node")
        .comment("This class collates all the information about a gr:ProductOrService \
                  included in a bundle."),
    TermDecl::class("UnitPriceSpecification")
        .label("Unit price specification")
        .comment("A unit price specification is a conceptual entity that specifies the \
                  price asked for a given gr:Offering by the respective gr:BusinessEntity.")
        .meta(&[("subClassOf", Iri("http://purl.org/goodrelations/v1#PriceSpecification"))]),
    TermDecl::class("WarrantyPromise")
        .label("Warranty promise")
        .comment("This is a conceptual entity that holds together all aspects of the \
                  n-ary relation between gr:Offering, gr:WarrantyScope, and duration."),
    TermDecl::class("WarrantyScope")
        .label("Warranty scope")
        .comment("The warranty scope represents types of services that will be provided free \
                  of charge by the vendor or manufacturer in the case of a defect."),
];

const PROPERTIES: &[TermDecl] = &[
    TermDecl::property("acceptedPaymentMethods")
        .label("accepted payment methods")
        .comment("The gr:PaymentMethod or methods accepted by the gr:BusinessEntity for the \
                  given gr:Offering.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#Offering")),
            ("range", Iri("http://purl.org/goodrelations/v1#PaymentMethod")),
        ]),
    TermDecl::property("addOn")
        .label("add-on")
        .comment("This property points from a gr:Offering to additional offerings that can \
                  only be obtained in combination with the first offering.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#Offering")),
            ("range", Iri("http://purl.org/goodrelations/v1#Offering")),
        ]),
    TermDecl::property("advanceBookingRequirement")
        .label("advance booking requirement")
        .comment("The minimal and maximal amount of time that is required between accepting \
                  the gr:Offering and the actual usage of the resource or service.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#Offering")),
            ("range", Iri("http://purl.org/goodrelations/v1#QuantitativeValueInteger")),
        ]),
    TermDecl::property("amountOfThisGood")
        .label("amount of this good")
        .comment("This property specifies the quantity of the goods included in the \
                  gr:Offering via this gr:TypeAndQuantityNode.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#TypeAndQuantityNode")),
            ("range", Iri(XSD_FLOAT)),
        ]),
    TermDecl::property("availabilityEnds")
        .label("availability ends")
        .comment("This property specifies the end of the availability of the \
                  gr:ProductOrService included in the gr:Offering.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#Offering")),
            ("range", Iri(XSD_DATETIME)),
        ]),
    TermDecl::property("availabilityStarts")
        .label("availability starts")
        .comment("This property specifies the beginning of the availability of the \
                  gr:ProductOrService included in the gr:Offering.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#Offering")),
            ("range", Iri(XSD_DATETIME)),
        ]),
    TermDecl::property("availableAtOrFrom")
        .label("available at or from")
        .comment("This states that a particular gr:Offering is available at or from the \
                  given gr:Location.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#Offering")),
            ("range", Iri("http://purl.org/goodrelations/v1#Location")),
        ]),
    TermDecl::property("availableDeliveryMethods")
        .label("available delivery methods")
        .comment("This specifies the gr:DeliveryMethod or methods available for a given \
                  gr:Offering.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#Offering")),
            ("range", Iri("http://purl.org/goodrelations/v1#DeliveryMethod")),
        ]),
    TermDecl::property("category")
        .label("category")
        .comment("The name of a category to which this gr:ProductOrService, gr:Offering, \
                  gr:BusinessEntity, or gr:Location belongs.")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("closes")
        .label("closes")
        .comment("The closing hour of the gr:Location on the given gr:DayOfWeek.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#OpeningHoursSpecification")),
            ("range", Iri("http://www.w3.org/2001/XMLSchema#time")),
        ]),
    TermDecl::property("condition")
        .label("condition")
        .comment("A textual description of the condition of the product or service, or the \
                  products or services included in the offer.")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("description")
        .label("description")
        .comment("A short textual description of the resource.")
        .meta(&[
            ("subPropertyOf", Iri("http://www.w3.org/2000/01/rdf-schema#comment")),
            ("range", Iri(XSD_STRING)),
        ]),
    TermDecl::property("eligibleCustomerTypes")
        .label("eligible customer types")
        .comment("The types of customers (gr:BusinessEntityType) for which the given \
                  gr:Offering is valid.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#Offering")),
            ("range", Iri("http://purl.org/goodrelations/v1#BusinessEntityType")),
        ]),
    TermDecl::property("eligibleRegions")
        .label("eligible regions")
        .comment("This property specifies the geo-political region or regions for which \
                  the gr:Offering, gr:License, or gr:DeliveryChargeSpecification is valid.")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("hasBrand")
        .label("has brand")
        .comment("This specifies the brand or brands (gr:Brand) associated with a \
                  gr:ProductOrService, or the brand or brands maintained by a \
                  gr:BusinessEntity.")
        .meta(&[("range", Iri("http://purl.org/goodrelations/v1#Brand"))]),
    TermDecl::property("hasBusinessFunction")
        .label("has business function")
        .comment("This specifies the business function of the gr:Offering, i.e. whether the \
                  gr:BusinessEntity is offering to sell, to lease, or to repair the \
                  particular type of product.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#Offering")),
            ("range", Iri("http://purl.org/goodrelations/v1#BusinessFunction")),
        ]),
    TermDecl::property("hasCurrency")
        .label("has currency")
        .comment("The currency for all prices in the gr:PriceSpecification given using the \
                  ISO 4217 standard (3 characters).")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#PriceSpecification")),
            ("range", Iri(XSD_STRING)),
        ]),
    TermDecl::property("hasCurrencyValue")
        .label("has currency value")
        .comment("This property specifies the amount of money for a price per unit, \
                  shipping charges, or payment charges.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#PriceSpecification")),
            ("range", Iri(XSD_FLOAT)),
        ]),
    TermDecl::property("hasEAN_UCC-13")
        .label("has EAN/UCC-13")
        .comment("The EAN·UCC-13 code of the given gr:ProductOrService or gr:Offering.")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("hasGTIN-14")
        .label("has GTIN-14")
        .comment("The Global Trade Item Number (GTIN-14) of the given gr:ProductOrService or \
                  gr:Offering.")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("hasMakeAndModel")
        .label("has make and model")
        .comment("This states that an actual product instance (gr:Individual) or a \
                  placeholder instance for multiple, unidentified such instances \
                  (gr:SomeItems) is one occurrence of a particular \
                  gr:ProductOrServiceModel.")
        .meta(&[("range", Iri("http://purl.org/goodrelations/v1#ProductOrServiceModel"))]),
    TermDecl::property("hasManufacturer")
        .label("has manufacturer")
        .comment("This object property links a gr:ProductOrService to the gr:BusinessEntity \
                  that produces it.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#ProductOrService")),
            ("range", Iri("http://purl.org/goodrelations/v1#BusinessEntity")),
        ]),
    TermDecl::property("hasMPN")
        .label("has MPN")
        .comment("The Manufacturer Part Number or MPN is a unique identifier for a product, \
                  service, or bundle from the perspective of a particular manufacturer.")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("hasOpeningHoursDayOfWeek")
        .label("has opening hours day of week")
        .comment("This specifies the gr:DayOfWeek to which the \
                  gr:OpeningHoursSpecification is related.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#OpeningHoursSpecification")),
            ("range", Iri("http://purl.org/goodrelations/v1#DayOfWeek")),
        ]),
    TermDecl::property("hasOpeningHoursSpecification")
        .label("has opening hours specification")
        .comment("This property links a gr:Location to a gr:OpeningHoursSpecification.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#Location")),
            ("range", Iri("http://purl.org/goodrelations/v1#OpeningHoursSpecification")),
        ]),
    TermDecl::property("hasPOS")
        .label("has POS")
        .comment("This property states that the respective gr:Location is a point of sale \
                  for the respective gr:BusinessEntity.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#BusinessEntity")),
            ("range", Iri("http://purl.org/goodrelations/v1#Location")),
        ]),
    TermDecl::property("hasPriceSpecification")
        .label("has price specification")
        .comment("This links a gr:Offering to a gr:PriceSpecification or specifications.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#Offering")),
            ("range", Iri("http://purl.org/goodrelations/v1#PriceSpecification")),
        ]),
    TermDecl::property("hasUnitOfMeasurement")
        .label("has unit of measurement")
        .comment("The unit of measurement for a gr:QuantitativeValue, a \
                  gr:PriceSpecification, or a gr:TypeAndQuantityNode given using the UN/CEFACT \
                  Common Code (3 characters).")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("hasValue")
        .label("has value")
        .comment("This subproperty specifies that the upper and lower limit of the given \
                  gr:QuantitativeValue are identical.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#QuantitativeValue")),
            ("range", Iri(RDFS_LITERAL)),
        ]),
    TermDecl::property("hasMaxValue")
        .label("has max value")
        .comment("This property captures the upper limit of a gr:QuantitativeValue instance.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#QuantitativeValue")),
            ("range", Iri(RDFS_LITERAL)),
        ]),
    TermDecl::property("hasMinValue")
        .label("has min value")
        .comment("This property captures the lower limit of a gr:QuantitativeValue instance.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#QuantitativeValue")),
            ("range", Iri(RDFS_LITERAL)),
        ]),
    TermDecl::property("hasWarrantyPromise")
        .label("has warranty promise")
        .comment("This specifies the gr:WarrantyPromise made by the gr:BusinessEntity for \
                  the given gr:Offering.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#Offering")),
            ("range", Iri("http://purl.org/goodrelations/v1#WarrantyPromise")),
        ]),
    TermDecl::property("hasWarrantyScope")
        .label("has warranty scope")
        .comment("This states the gr:WarrantyScope of a given gr:WarrantyPromise.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#WarrantyPromise")),
            ("range", Iri("http://purl.org/goodrelations/v1#WarrantyScope")),
        ]),
    TermDecl::property("includes")
        .label("includes")
        .comment("This object property is a shortcut for the original gr:includesObject \
                  property for the common case of having exactly one single instance of \
                  gr:ProductOrService included in an gr:Offering.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#Offering")),
            ("range", Iri("http://purl.org/goodrelations/v1#ProductOrService")),
        ]),
    TermDecl::property("includesObject")
        .label("includes object")
        .comment("This object property links a gr:Offering to one or multiple \
                  gr:TypeAndQuantityNode or nodes that specify the components that are \
                  included in the respective offer.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#Offering")),
            ("range", Iri("http://purl.org/goodrelations/v1#TypeAndQuantityNode")),
        ]),
    TermDecl::property("isAccessoryOrSparePartFor")
        .label("is accessory or spare part for")
        .comment("This states that a particular gr:ProductOrService is an accessory or \
                  spare part for another product or service.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#ProductOrService")),
            ("range", Iri("http://purl.org/goodrelations/v1#ProductOrService")),
        ]),
    TermDecl::property("isConsumableFor")
        .label("is consumable for")
        .comment("This states that a particular gr:ProductOrService is a consumable for \
                  another product or service.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#ProductOrService")),
            ("range", Iri("http://purl.org/goodrelations/v1#ProductOrService")),
        ]),
    TermDecl::property("isSimilarTo")
        .label("is similar to")
        .comment("This states that a given gr:ProductOrService is similar to another \
                  product or service.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#ProductOrService")),
            ("range", Iri("http://purl.org/goodrelations/v1#ProductOrService")),
        ]),
    TermDecl::property("isVariantOf")
        .label("is variant of")
        .comment("This states that a particular gr:ProductOrServiceModel is a variant of \
                  another product or service model.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#ProductOrServiceModel")),
            ("range", Iri("http://purl.org/goodrelations/v1#ProductOrServiceModel")),
        ]),
    TermDecl::property("legalName")
        .label("legal name")
        .comment("The legal name of the gr:BusinessEntity.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#BusinessEntity")),
            ("range", Iri(XSD_STRING)),
        ]),
    TermDecl::property("name")
        .label("name")
        .comment("A short text describing the respective resource.")
        .meta(&[
            ("subPropertyOf", Iri("http://www.w3.org/2000/01/rdf-schema#label")),
            ("range", Iri(XSD_STRING)),
        ]),
    TermDecl::property("offers")
        .label("offers")
        .comment("This links a gr:BusinessEntity to the offers (gr:Offering) it makes.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#BusinessEntity")),
            ("range", Iri("http://purl.org/goodrelations/v1#Offering")),
        ]),
    TermDecl::property("opens")
        .label("opens")
        .comment("The opening hour of the gr:Location on the given gr:DayOfWeek.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#OpeningHoursSpecification")),
            ("range", Iri("http://www.w3.org/2001/XMLSchema#time")),
        ]),
    TermDecl::property("seeks")
        .label("seeks")
        .comment("This links a gr:BusinessEntity to gr:Offering nodes that describe what \
                  the business entity is interested in.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#BusinessEntity")),
            ("range", Iri("http://purl.org/goodrelations/v1#Offering")),
        ]),
    TermDecl::property("serialNumber")
        .label("serial number")
        .comment("The serial number or any alphanumeric identifier of a particular product.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#Individual")),
            ("range", Iri(XSD_STRING)),
        ]),
    TermDecl::property("validFrom")
        .label("valid from")
        .comment("This property specifies the beginning of the validity of the gr:Offering, \
                  gr:PriceSpecification, gr:License, or gr:OpeningHoursSpecification.")
        .meta(&[("range", Iri(XSD_DATETIME))]),
    TermDecl::property("validThrough")
        .label("valid through")
        .comment("This property specifies the end of the validity of the gr:Offering, \
                  gr:PriceSpecification, gr:License, or gr:OpeningHoursSpecification.")
        .meta(&[("range", Iri(XSD_DATETIME))]),
    TermDecl::property("valueAddedTaxIncluded")
        .label("value added tax included")
        .comment("This property specifies whether the applicable value-added tax (VAT) is \
                  included in the price of the gr:UnitPriceSpecification or not.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#UnitPriceSpecification")),
            ("range", Iri(XSD_BOOLEAN)),
        ]),
    TermDecl::property("vatID")
        .label("VAT ID")
        .comment("The Value-added Tax ID of the gr:BusinessEntity.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#BusinessEntity")),
            ("range", Iri(XSD_STRING)),
        ]),
    TermDecl::property("weight")
        .label("weight")
        .comment("The weight of the gr:ProductOrService.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#ProductOrService")),
            ("range", Iri("http://purl.org/goodrelations/v1#QuantitativeValueFloat")),
            ("subPropertyOf", Iri("http://purl.org/goodrelations/v1#quantitativeProductOrServiceProperty")),
        ]),
    TermDecl::property("quantitativeProductOrServiceProperty")
        .label("quantitative product or service property")
        .comment("This is the super property of all quantitative properties for products \
                  and services.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#ProductOrService")),
            ("range", Iri("http://purl.org/goodrelations/v1#QuantitativeValue")),
        ]),
    TermDecl::property("qualitativeProductOrServiceProperty")
        .label("qualitative product or service property")
        .comment("This is the super property of all qualitative properties for products \
                  and services.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#ProductOrService")),
            ("range", Iri("http://purl.org/goodrelations/v1#QualitativeValue")),
        ]),
    TermDecl::property("typeOfGood")
        .label("type of good")
        .comment("This specifies the gr:ProductOrService that the gr:TypeAndQuantityNode \
                  is referring to.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#TypeAndQuantityNode")),
            ("range", Iri("http://purl.org/goodrelations/v1#ProductOrService")),
        ]),
    TermDecl::property("depth")
        .label("depth")
        .comment("The depth of the product.")
        .meta(&[
            ("domain", Iri("http://purl.org/goodrelations/v1#ProductOrService")),
            ("range", Iris(&[
                "http://purl.org/goodrelations/v1#QuantitativeValue",
                "http://purl.org/goodrelations/v1#QuantitativeValueFloat",
            ])),
        ]),
];

const INDIVIDUALS: &[TermDecl] = &[
    TermDecl::individual("Sell")
        .label("Sell")
        .comment("This gr:BusinessFunction indicates that the gr:BusinessEntity offers to \
                  permanently transfer all property rights on the gr:ProductOrService.")
        .meta(&[("type", Iri("http://purl.org/goodrelations/v1#BusinessFunction"))]),
    TermDecl::individual("LeaseOut")
        .label("Lease out")
        .comment("This gr:BusinessFunction indicates that the gr:BusinessEntity offers to \
                  temporarily transfer the property rights on the gr:ProductOrService.")
        .meta(&[("type", Iri("http://purl.org/goodrelations/v1#BusinessFunction"))]),
    TermDecl::individual("Repair")
        .label("Repair")
        .comment("This gr:BusinessFunction indicates that the gr:BusinessEntity offers to \
                  evaluate the chances for repairing, and, if positive, repair the object.")
        .meta(&[("type", Iri("http://purl.org/goodrelations/v1#BusinessFunction"))]),
    TermDecl::individual("Buy")
        .label("Buy")
        .comment("This gr:BusinessFunction indicates that the gr:BusinessEntity is in \
                  general interested in purchasing the specified gr:ProductOrService.")
        .meta(&[("type", Iri("http://purl.org/goodrelations/v1#BusinessFunction"))]),
    TermDecl::individual("Business")
        .label("Business")
        .comment("The gr:BusinessEntityType representing such agents that are themselves \
                  offering commercial services or products on the market.")
        .meta(&[("type", Iri("http://purl.org/goodrelations/v1#BusinessEntityType"))]),
    TermDecl::individual("Enduser")
        .label("Enduser")
        .comment("The gr:BusinessEntityType representing such agents that are purchasing \
                  the good or service for private consumption.")
        .meta(&[("type", Iri("http://purl.org/goodrelations/v1#BusinessEntityType"))]),
    TermDecl::individual("Monday")
        .label("Monday")
        .comment("Monday as a day of the week.")
        .meta(&[("type", Iri("http://purl.org/goodrelations/v1#DayOfWeek"))]),
    TermDecl::individual("Sunday")
        .label("Sunday")
        .comment("Sunday as a day of the week.")
        .meta(&[("type", Iri("http://purl.org/goodrelations/v1#DayOfWeek"))]),
    TermDecl::individual("PayPal")
        .label("PayPal")
        .comment("Payment via the PayPal payment service.")
        .meta(&[("type", Iri("http://purl.org/goodrelations/v1#PaymentMethod"))]),
    TermDecl::individual("DeliveryModePickUp")
        .label("Delivery mode pick up")
        .comment("Delivery of the goods by picking them up at one of the stores etc. \
                  (gr:Location) during the opening hours.")
        .meta(&[("type", Iri("http://purl.org/goodrelations/v1#DeliveryMethod"))]),
];
